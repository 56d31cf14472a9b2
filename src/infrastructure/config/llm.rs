//! Generative backend configuration.
//!
//! The API key is read from `GEMINI_API_KEY` at load time and is never taken
//! from the config file.

use serde::Deserialize;

use crate::adapter::outbound::llm::gemini::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Gemini backend configuration.
#[derive(Clone, Deserialize)]
pub struct LlmConfig {
    /// Model identifier.
    ///
    /// Defaults to "gemini-2.0-flash".
    #[serde(default = "default_model")]
    pub model: String,

    /// REST base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Sampling temperature for generation.
    ///
    /// Higher values give more varied quotes. Defaults to 1.0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Per-request timeout in seconds. Defaults to 30.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API key loaded from `GEMINI_API_KEY` at runtime.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "<REDACTED>"))
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_url: default_api_url(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

fn default_temperature() -> f64 {
    1.0
}

const fn default_timeout_secs() -> u64 {
    30
}
