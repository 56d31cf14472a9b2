//! Fixed-capacity FIFO window of recently generated quotes.
//!
//! The generator feeds this window back to the model as context so that
//! consecutive quotes do not repeat. It lives only as long as the process.

use std::collections::VecDeque;

use super::error::DomainError;
use super::quote::QuoteText;

/// Default number of recent quotes kept as generation context.
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;

/// Bounded history of validated generator outputs, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    entries: VecDeque<QuoteText>,
    capacity: usize,
}

impl HistoryWindow {
    /// Create an empty window holding at most `capacity` entries.
    pub fn try_new(capacity: usize) -> Result<Self, DomainError> {
        if capacity == 0 {
            return Err(DomainError::ZeroCapacity);
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append an entry, evicting the oldest one first when full.
    ///
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, text: QuoteText) -> Option<QuoteText> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(text);
        evicted
    }

    /// Copy of the current entries, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|text| text.as_str().to_string())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}
