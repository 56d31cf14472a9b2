//! Configuration operator implementation.

use crate::error::Result;
use crate::port::inbound::operator::config::{
    ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: Option<&str>) -> Result<ConfigView> {
        let config = Self::load(config_toml)?;

        Ok(ConfigView {
            prompt: config.prompt,
            database: config.database,
            table: config.table,
            server_address: config.server.address(),
            instance_metadata: config.server.instance_metadata,
            model: config.llm.model,
            api_url: config.llm.api_url,
            temperature: config.llm.temperature,
            timeout_secs: config.llm.timeout_secs,
            api_key_loaded: config.llm.api_key.is_some(),
            max_attempts: config.generator.max_attempts,
            history_capacity: config.generator.history_capacity,
            log_level: config.logging.level,
            log_format: config.logging.format,
        })
    }

    fn validate_config(&self, config_toml: Option<&str>) -> Result<ConfigValidationReport> {
        let config = Self::load(config_toml)?;
        let mut warnings = Vec::new();

        if config.llm.api_key.is_none() {
            warnings.push(
                "GEMINI_API_KEY not set (required to open the quote service)".to_string(),
            );
        }
        if config.llm.temperature == 0.0 {
            warnings.push("temperature is 0; quotes will repeat often".to_string());
        }
        if config_toml.is_none() {
            warnings.push("No config file found; using defaults".to_string());
        }

        Ok(ConfigValidationReport { warnings })
    }
}
