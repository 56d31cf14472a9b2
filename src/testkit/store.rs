//! A [`QuoteStore`] that is always down.

use crate::domain::quote::{Quote, QuoteId, QuoteText};
use crate::error::{Result, StoreError};
use crate::port::outbound::store::QuoteStore;

/// Every operation fails with [`StoreError::Unavailable`].
pub struct FailingStore {
    reason: String,
}

impl FailingStore {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn unavailable<T>(&self) -> Result<T> {
        Err(StoreError::Unavailable(self.reason.clone()).into())
    }
}

impl QuoteStore for FailingStore {
    async fn insert(&self, _id: QuoteId, _text: &QuoteText) -> Result<()> {
        self.unavailable()
    }

    async fn insert_next(&self, _text: &QuoteText) -> Result<Quote> {
        self.unavailable()
    }

    async fn count(&self) -> Result<u64> {
        self.unavailable()
    }

    async fn get(&self, _id: QuoteId) -> Result<Option<Quote>> {
        self.unavailable()
    }

    async fn latest(&self) -> Result<Option<Quote>> {
        self.unavailable()
    }

    async fn list(&self) -> Result<Vec<Quote>> {
        self.unavailable()
    }

    async fn clear_all(&self) -> Result<u64> {
        self.unavailable()
    }
}
