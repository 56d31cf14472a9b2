//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic. This layer handles configuration, composition of the
//! service graph, and host lookups.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`instance`] - Host address lookup for the page footer
//! - [`operator`] - Operator ports backing the CLI

pub mod bootstrap;
pub mod config;
pub mod instance;
pub mod operator;
