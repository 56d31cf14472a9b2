use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::quote::QuoteId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Quote store errors.
///
/// A missing quote is not an error: lookups return `Ok(None)` for that case,
/// so callers can always tell "nothing stored" apart from "store is down".
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("quote store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record for quote {id}: {reason}")]
    MalformedRecord { id: i64, reason: String },

    #[error("quote {id} already exists")]
    Conflict { id: QuoteId },
}

/// Quote generation errors.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generated output failed validation: {0}")]
    Validation(String),

    #[error("no valid quote after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("generative backend failed: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
