//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`quote`]: the quote use cases served by HTTP and the CLI
//! - [`operator`]: configuration and runtime wiring for the CLI

pub mod operator;
pub mod quote;
