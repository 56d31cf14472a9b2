//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! ```
//! use quotebook::domain::error::DomainError;
//! use quotebook::domain::quote::QuoteText;
//!
//! let result = QuoteText::try_new("   ");
//! assert!(matches!(result, Err(DomainError::EmptyQuote)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Quote ids start at 1.
    #[error("quote id must be positive, got {id}")]
    NonPositiveId {
        /// The invalid id that was provided.
        id: u64,
    },

    /// Quote text must contain something other than whitespace.
    #[error("quote text cannot be empty")]
    EmptyQuote,

    /// A bounded buffer needs room for at least one entry.
    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}
