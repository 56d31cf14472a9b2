//! SQLite persistence adapter.
//!
//! Stores quotes in a single Diesel-managed table. Each configured
//! collection (the `table` setting) is a separate id space inside it.

pub mod database;
pub mod store;
