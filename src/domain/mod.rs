//! Storage- and provider-agnostic domain types.

pub mod error;
pub mod history;
pub mod quote;
