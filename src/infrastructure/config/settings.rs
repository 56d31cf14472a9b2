//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for secrets and deployment knobs:
//!
//! | Variable             | Overrides            |
//! |----------------------|----------------------|
//! | `GEMINI_API_KEY`     | `llm.api_key`        |
//! | `TABLE_NAME`         | `table`              |
//! | `QUOTEBOOK_DATABASE` | `database`           |
//! | `PORT`               | `server.port`        |
//!
//! # Example
//!
//! ```no_run
//! use quotebook::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::generator::GeneratorConfig;
use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::adapter::outbound::llm::gemini::API_KEY_ENV;
use crate::error::{ConfigError, Result};

/// Instruction sent to the model when the config does not set one.
pub const DEFAULT_PROMPT: &str = "Generate a quote that is no longer than 30 words in length. \
The content can either be silly, nonsensical, inspirational, or passive aggressive. \
Choose only one of these at your discretion.";

/// Main application configuration.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Fixed instruction sent to the generative backend.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Path to SQLite database file.
    ///
    /// Defaults to "quotebook.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logical table (collection) the quotes live in.
    ///
    /// Defaults to "words_to_live_by".
    #[serde(default = "default_table")]
    pub table: String,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Generative backend settings.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Retry budget and history window.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            database: default_database_path(),
            table: default_table(),
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            generator: GeneratorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_database_path() -> String {
    "quotebook.db".to_string()
}

fn default_table() -> String {
    "words_to_live_by".to_string()
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed, an override cannot
    /// be parsed, or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment
    /// lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::parse_toml`].
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        // Secrets never come from the config file.
        self.llm.api_key = non_empty(API_KEY_ENV);

        if let Some(table) = non_empty("TABLE_NAME") {
            self.table = table;
        }
        if let Some(database) = non_empty("QUOTEBOOK_DATABASE") {
            self.database = database;
        }
        if let Some(port) = non_empty("PORT") {
            self.server.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("{e}"),
            })?;
        }
        Ok(())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "prompt" }.into());
        }
        if self.table.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "table" }.into());
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.generator.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.generator.history_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history_capacity",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: "must be between 0 and 2".to_string(),
            }
            .into());
        }
        Self::validate_http_url("api_url", &self.llm.api_url)?;
        if self.server.instance_metadata {
            Self::validate_http_url("instance_metadata_url", &self.server.instance_metadata_url)?;
        }
        Ok(())
    }

    fn validate_http_url(field: &'static str, raw: &str) -> Result<()> {
        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
