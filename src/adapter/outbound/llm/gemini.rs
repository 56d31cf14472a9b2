//! Google Gemini LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the Gemini
//! `generateContent` API with JSON-constrained output.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ConfigError, Error, GenerationError, Result};
use crate::port::outbound::llm::{CompletionRequest, Llm};

/// Gemini REST API base URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini API client.
pub struct Gemini {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Base URL, without trailing slash.
    api_url: String,
    /// Model identifier (e.g., "gemini-2.0-flash").
    model: String,
    /// Sampling temperature.
    temperature: f64,
}

impl std::fmt::Debug for Gemini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("api_key", &"<REDACTED>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Gemini {
    /// Create a new Gemini client with explicit configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                Client::new()
            });

        Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature,
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or empty.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField { field: API_KEY_ENV })?;
        Ok(Self::new(
            api_key,
            DEFAULT_API_URL,
            model,
            1.0,
            Duration::from_secs(30),
        ))
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    temperature: f64,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Response {
    /// Text of the first candidate; empty when the model returned nothing.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

fn build_request(request: &CompletionRequest, temperature: f64) -> Request {
    Request {
        contents: vec![Content {
            role: "user",
            parts: vec![Part {
                text: request.prompt(),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: request.response_schema.clone(),
            temperature,
        },
    }
}

#[async_trait]
impl Llm for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = build_request(request, self.temperature);
        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Generation(GenerationError::Backend(e.to_string())))?
            .json::<Response>()
            .await?;

        Ok(response.into_text())
    }
}


/// Integration tests that require real API access.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use super::*;
    use crate::application::generator::{quote_schema, validate_response};

    #[tokio::test]
    #[ignore = "requires GEMINI_API_KEY and network access"]
    async fn test_structured_quote() {
        let client = match Gemini::from_env(DEFAULT_MODEL) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Skipping Gemini integration test: {}", e);
                return;
            }
        };

        let request = CompletionRequest {
            instruction: "Generate a quote that is no longer than 30 words in length.".into(),
            context: vec![],
            response_schema: quote_schema(),
        };

        let raw = tokio::time::timeout(Duration::from_secs(30), client.complete(&request))
            .await
            .expect("Request timed out")
            .expect("API call failed");

        assert!(validate_response(&raw).is_ok(), "Unexpected response: {raw}");
    }
}
