//! In-process quote store.
//!
//! Backs `--ephemeral` runs and tests. Contents are lost on restart.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::domain::quote::{Quote, QuoteId, QuoteText};
use crate::error::{Result, StoreError};
use crate::port::outbound::store::QuoteStore;

/// Quote store held in a mutex-guarded ordered map.
#[derive(Debug, Default)]
pub struct MemoryQuoteStore {
    quotes: Mutex<BTreeMap<QuoteId, Quote>>,
}

impl MemoryQuoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuoteStore for MemoryQuoteStore {
    async fn insert(&self, id: QuoteId, text: &QuoteText) -> Result<()> {
        self.quotes.lock().insert(id, Quote::new(id, text.clone()));
        Ok(())
    }

    async fn insert_next(&self, text: &QuoteText) -> Result<Quote> {
        let mut quotes = self.quotes.lock();
        let id = QuoteId::after_count(quotes.len() as u64);
        if quotes.contains_key(&id) {
            return Err(StoreError::Conflict { id }.into());
        }

        let quote = Quote::new(id, text.clone());
        quotes.insert(id, quote.clone());
        Ok(quote)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.quotes.lock().len() as u64)
    }

    async fn get(&self, id: QuoteId) -> Result<Option<Quote>> {
        Ok(self.quotes.lock().get(&id).cloned())
    }

    async fn latest(&self) -> Result<Option<Quote>> {
        Ok(self
            .quotes
            .lock()
            .last_key_value()
            .map(|(_, quote)| quote.clone()))
    }

    async fn list(&self) -> Result<Vec<Quote>> {
        Ok(self.quotes.lock().values().cloned().collect())
    }

    async fn clear_all(&self) -> Result<u64> {
        let mut quotes = self.quotes.lock();
        let deleted = quotes.len() as u64;
        quotes.clear();
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn text(s: &str) -> QuoteText {
        QuoteText::try_new(s).unwrap()
    }

    fn id(n: u64) -> QuoteId {
        QuoteId::try_new(n).unwrap()
    }

    #[tokio::test]
    async fn empty_store_counts_zero_and_finds_nothing() {
        let store = MemoryQuoteStore::new();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.get(id(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_overwrites_existing_id() {
        let store = MemoryQuoteStore::new();
        store.insert(id(1), &text("old")).await.unwrap();
        store.insert(id(1), &text("new")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let quote = store.get(id(1)).await.unwrap().unwrap();
        assert_eq!(quote.text.as_str(), "new");
    }

    #[tokio::test]
    async fn insert_next_assigns_contiguous_ids() {
        let store = MemoryQuoteStore::new();
        let first = store.insert_next(&text("a")).await.unwrap();
        let second = store.insert_next(&text("b")).await.unwrap();

        assert_eq!(first.id, id(1));
        assert_eq!(second.id, id(2));
    }

    #[tokio::test]
    async fn insert_next_refuses_to_overwrite() {
        let store = MemoryQuoteStore::new();
        store.insert(id(2), &text("squatter")).await.unwrap();

        let err = store.insert_next(&text("b")).await.unwrap_err();

        assert!(matches!(err, Error::Store(StoreError::Conflict { id }) if id.get() == 2));
        let kept = store.get(id(2)).await.unwrap().unwrap();
        assert_eq!(kept.text.as_str(), "squatter");
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryQuoteStore::new();
        store.insert(id(3), &text("c")).await.unwrap();
        store.insert(id(1), &text("a")).await.unwrap();

        let ids: Vec<u64> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|q| q.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn latest_is_highest_id() {
        let store = MemoryQuoteStore::new();
        assert!(store.latest().await.unwrap().is_none());

        store.insert(id(2), &text("b")).await.unwrap();
        store.insert(id(7), &text("g")).await.unwrap();
        store.insert(id(3), &text("c")).await.unwrap();

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.id, id(7));
    }

    #[tokio::test]
    async fn clear_all_reports_deleted() {
        let store = MemoryQuoteStore::new();
        for n in 1..=5 {
            store.insert(id(n), &text("x")).await.unwrap();
        }

        assert_eq!(store.clear_all().await.unwrap(), 5);
        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.clear_all().await.unwrap(), 0);
    }
}
