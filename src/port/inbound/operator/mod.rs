//! Operator capability surface for the CLI.
//!
//! Configuration arrives as TOML text so the ports stay free of filesystem
//! types; the adapter decides where the text comes from.

pub mod config;
pub mod port;
pub mod runtime;
