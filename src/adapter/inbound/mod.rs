//! Inbound adapters: the HTTP page and the command-line interface.

pub mod cli;
pub mod http;
