//! Configuration projections for operator-facing adapters.

use crate::error::Result;

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone)]
pub struct ConfigView {
    pub prompt: String,
    pub database: String,
    pub table: String,
    pub server_address: String,
    pub instance_metadata: bool,
    pub model: String,
    pub api_url: String,
    pub temperature: f64,
    pub timeout_secs: u64,
    pub api_key_loaded: bool,
    pub max_attempts: u32,
    pub history_capacity: usize,
    pub log_level: String,
    pub log_format: String,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
///
/// `None` means no config file: defaults plus environment.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    fn show_config(&self, config_toml: Option<&str>) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: Option<&str>) -> Result<ConfigValidationReport>;
}
