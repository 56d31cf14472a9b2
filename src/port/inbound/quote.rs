//! Quote use cases exposed to the HTTP and CLI adapters.

use async_trait::async_trait;

use crate::domain::quote::{DisplayQuote, Quote};
use crate::error::Result;

/// Application surface the inbound adapters drive.
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// The latest stored quote, or the "no quotes yet" placeholder.
    async fn view_current(&self) -> Result<DisplayQuote>;

    /// Generate a new quote and persist it under the next id.
    async fn generate_and_store(&self) -> Result<Quote>;

    /// Delete every stored quote. Returns count deleted.
    async fn clear(&self) -> Result<u64>;

    /// Every stored quote ordered by id.
    async fn list(&self) -> Result<Vec<Quote>>;
}
