//! Persistence port for quotes.

use std::future::Future;

use crate::domain::quote::{Quote, QuoteId, QuoteText};
use crate::error::Result;

/// Storage operations for quotes keyed by integer id.
///
/// "Not found" is `Ok(None)`. Connectivity problems and unreadable records
/// come back as [`StoreError`](crate::error::StoreError) so callers never
/// mistake an outage for an empty store.
pub trait QuoteStore: Send + Sync {
    /// Save a quote under `id`, replacing any existing record.
    fn insert(&self, id: QuoteId, text: &QuoteText) -> impl Future<Output = Result<()>> + Send;

    /// Atomically assign `count() + 1` and insert under that id.
    ///
    /// Fails with `StoreError::Conflict` instead of overwriting when the id
    /// is already taken.
    fn insert_next(&self, text: &QuoteText) -> impl Future<Output = Result<Quote>> + Send;

    /// Number of stored quotes.
    fn count(&self) -> impl Future<Output = Result<u64>> + Send;

    /// Get a quote by id.
    fn get(&self, id: QuoteId) -> impl Future<Output = Result<Option<Quote>>> + Send;

    /// The quote with the highest id, if any.
    fn latest(&self) -> impl Future<Output = Result<Option<Quote>>> + Send;

    /// All quotes ordered by id.
    fn list(&self) -> impl Future<Output = Result<Vec<Quote>>> + Send;

    /// Delete every quote. Returns count deleted.
    fn clear_all(&self) -> impl Future<Output = Result<u64>> + Send;
}
