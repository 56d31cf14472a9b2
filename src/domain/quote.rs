//! Quote identity, text, and the page-facing view of the latest quote.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Text shown when there is no latest quote to display.
pub const NO_QUOTES_MESSAGE: &str = "No quotes currently in database, please generate one.";

/// Store-assigned quote identifier.
///
/// Ids are positive and, while nothing is deleted out of band, contiguous
/// from 1. The latest quote is the one with the highest id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct QuoteId(u64);

impl QuoteId {
    /// The id given to the first quote in an empty store.
    pub const FIRST: Self = Self(1);

    /// Create a `QuoteId`, rejecting zero.
    pub fn try_new(id: u64) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::NonPositiveId { id });
        }
        Ok(Self(id))
    }

    /// The id that follows a store holding `count` quotes.
    #[must_use]
    pub fn after_count(count: u64) -> Self {
        Self(count.saturating_add(1))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for QuoteId {
    type Error = DomainError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::try_new(id)
    }
}

impl From<QuoteId> for u64 {
    fn from(id: QuoteId) -> Self {
        id.0
    }
}

/// Validated quote text: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuoteText(String);

impl QuoteText {
    /// Create a `QuoteText`, trimming surrounding whitespace.
    pub fn try_new(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuote);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for QuoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for QuoteText {
    type Error = DomainError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::try_new(text)
    }
}

impl From<QuoteText> for String {
    fn from(text: QuoteText) -> Self {
        text.0
    }
}

/// A stored quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub text: QuoteText,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Create a quote stamped with the current time.
    #[must_use]
    pub fn new(id: QuoteId, text: QuoteText) -> Self {
        Self {
            id,
            text,
            created_at: Utc::now(),
        }
    }
}

/// What the page shows: the latest quote and how many are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayQuote {
    pub quote_count: u64,
    pub quote: String,
}

impl DisplayQuote {
    /// Placeholder view for a store with nothing to show.
    #[must_use]
    pub fn empty(quote_count: u64) -> Self {
        Self {
            quote_count,
            quote: NO_QUOTES_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn latest(quote_count: u64, text: &QuoteText) -> Self {
        Self {
            quote_count,
            quote: text.as_str().to_string(),
        }
    }

    /// True when this view is the "no quotes yet" placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quote == NO_QUOTES_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_id_rejects_zero() {
        assert_eq!(
            QuoteId::try_new(0),
            Err(DomainError::NonPositiveId { id: 0 })
        );
        assert_eq!(QuoteId::try_new(7).unwrap().get(), 7);
    }

    #[test]
    fn quote_id_after_count_is_next_in_sequence() {
        assert_eq!(QuoteId::after_count(0), QuoteId::FIRST);
        assert_eq!(QuoteId::after_count(2).get(), 3);
    }

    #[test]
    fn quote_id_deserialize_rejects_zero() {
        let parsed: std::result::Result<QuoteId, _> = serde_json::from_str("0");
        assert!(parsed.is_err());
        let parsed: QuoteId = serde_json::from_str("4").unwrap();
        assert_eq!(parsed.get(), 4);
    }

    #[test]
    fn quote_text_trims_and_rejects_blank() {
        assert_eq!(QuoteText::try_new("  Carpe diem. ").unwrap().as_str(), "Carpe diem.");
        assert_eq!(QuoteText::try_new(""), Err(DomainError::EmptyQuote));
        assert_eq!(QuoteText::try_new("\n\t "), Err(DomainError::EmptyQuote));
    }

    #[test]
    fn display_quote_empty_uses_placeholder() {
        let view = DisplayQuote::empty(0);
        assert_eq!(view.quote_count, 0);
        assert_eq!(
            view.quote,
            "No quotes currently in database, please generate one."
        );
        assert!(view.is_empty());
    }

    #[test]
    fn display_quote_latest_carries_text() {
        let text = QuoteText::try_new("Carpe diem.").unwrap();
        let view = DisplayQuote::latest(1, &text);
        assert_eq!(view.quote_count, 1);
        assert_eq!(view.quote, "Carpe diem.");
        assert!(!view.is_empty());
    }
}
