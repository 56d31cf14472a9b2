//! Quote generation with schema validation, bounded retry, and rolling context.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::domain::history::HistoryWindow;
use crate::domain::quote::QuoteText;
use crate::error::{GenerationError, Result};
use crate::port::outbound::llm::{CompletionRequest, Llm};

/// Default number of backend calls per `generate` before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Shape every backend response must parse into.
#[derive(Debug, Deserialize)]
struct QuotePayload {
    quote: String,
}

/// JSON schema for a single object with a required string `quote` field.
#[must_use]
pub fn quote_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "quote": { "type": "STRING" }
        },
        "required": ["quote"]
    })
}

/// Parse and validate a raw backend response.
pub fn validate_response(raw: &str) -> std::result::Result<QuoteText, GenerationError> {
    let payload: QuotePayload = serde_json::from_str(raw.trim())
        .map_err(|e| GenerationError::Validation(e.to_string()))?;
    QuoteText::try_new(payload.quote).map_err(|e| GenerationError::Validation(e.to_string()))
}

/// Produces one validated quote per successful call.
///
/// Keeps a bounded window of its recent outputs and sends it to the backend
/// as context to discourage repeats.
pub struct QuoteGenerator {
    llm: Arc<dyn Llm>,
    instruction: String,
    max_attempts: u32,
    history: Mutex<HistoryWindow>,
}

impl QuoteGenerator {
    #[must_use]
    pub fn new(llm: Arc<dyn Llm>, instruction: impl Into<String>) -> Self {
        Self {
            llm,
            instruction: instruction.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            history: Mutex::new(HistoryWindow::default()),
        }
    }

    /// Override the attempt budget. Values below 1 are treated as 1.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: HistoryWindow) -> Self {
        self.history = Mutex::new(history);
        self
    }

    /// Current history window contents, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.lock().snapshot()
    }

    fn request(&self) -> CompletionRequest {
        CompletionRequest {
            instruction: self.instruction.clone(),
            context: self.history.lock().snapshot(),
            response_schema: quote_schema(),
        }
    }

    /// Ask the backend for a quote, retrying on malformed output.
    ///
    /// Backend transport failures are returned immediately; only responses
    /// that fail validation consume further attempts.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Backend`] when the backend call fails and
    /// [`GenerationError::Exhausted`] when every attempt produced malformed
    /// output.
    pub async fn generate(&self) -> Result<QuoteText> {
        let request = self.request();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(
                provider = self.llm.name(),
                attempt,
                context_len = request.context.len(),
                "Requesting quote"
            );

            let raw = self.llm.complete(&request).await.map_err(|e| {
                warn!(provider = self.llm.name(), error = %e, "Quote backend call failed");
                GenerationError::Backend(e.to_string())
            })?;

            match validate_response(&raw) {
                Ok(text) => {
                    let evicted = self.history.lock().push(text.clone());
                    if evicted.is_some() {
                        debug!("History window full, evicted oldest quote");
                    }
                    info!(attempt, "Quote generated");
                    return Ok(text);
                }
                Err(err) => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "Generated quote failed validation"
                    );
                    if attempt >= self.max_attempts {
                        return Err(GenerationError::Exhausted { attempts: attempt }.into());
                    }
                }
            }
        }
    }
}
