//! Generation orchestrator.
//!
//! Stitches the [`QuoteGenerator`] and a [`QuoteStore`] together: generate a
//! quote, assign it the next id, persist it, and answer which quote is the
//! latest.

use async_trait::async_trait;
use tracing::{info, warn};

use super::generator::QuoteGenerator;
use crate::domain::quote::{DisplayQuote, Quote};
use crate::error::Result;
use crate::port::inbound::quote::QuoteService;
use crate::port::outbound::store::QuoteStore;

/// Coordinates generation and persistence.
///
/// Both collaborators are injected at construction; there is no global
/// state.
pub struct Orchestrator<S> {
    generator: QuoteGenerator,
    store: S,
}

impl<S: QuoteStore> Orchestrator<S> {
    #[must_use]
    pub fn new(generator: QuoteGenerator, store: S) -> Self {
        Self { generator, store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn generator(&self) -> &QuoteGenerator {
        &self.generator
    }

    /// The quote with the highest id, alongside the stored count.
    pub async fn view_current(&self) -> Result<DisplayQuote> {
        let count = self.store.count().await?;
        if count == 0 {
            return Ok(DisplayQuote::empty(0));
        }

        match self.store.latest().await? {
            Some(quote) => {
                if quote.id.get() != count {
                    warn!(quote_id = %quote.id, count, "Quote ids are not contiguous");
                }
                Ok(DisplayQuote::latest(count, &quote.text))
            }
            // Cleared between the two reads.
            None => Ok(DisplayQuote::empty(0)),
        }
    }

    /// Generate a quote and store it under the next id.
    ///
    /// Nothing is written when generation fails.
    pub async fn generate_and_store(&self) -> Result<Quote> {
        info!("Generating quote");
        let text = self.generator.generate().await?;

        let quote = self.store.insert_next(&text).await?;
        info!(quote_id = %quote.id, "Quote stored");
        Ok(quote)
    }

    /// Delete every stored quote. Returns count deleted.
    pub async fn clear(&self) -> Result<u64> {
        let deleted = self.store.clear_all().await?;
        info!(deleted, "Cleared quotes");
        Ok(deleted)
    }

    pub async fn list(&self) -> Result<Vec<Quote>> {
        self.store.list().await
    }
}

#[async_trait]
impl<S: QuoteStore + 'static> QuoteService for Orchestrator<S> {
    async fn view_current(&self) -> Result<DisplayQuote> {
        Orchestrator::view_current(self).await
    }

    async fn generate_and_store(&self) -> Result<Quote> {
        Orchestrator::generate_and_store(self).await
    }

    async fn clear(&self) -> Result<u64> {
        Orchestrator::clear(self).await
    }

    async fn list(&self) -> Result<Vec<Quote>> {
        Orchestrator::list(self).await
    }
}
