//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{output, paths};
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

/// Execute `config show`.
pub fn execute_show(
    operator: &dyn OperatorPort,
    config_toml: Option<&str>,
    path: Option<&Path>,
) -> Result<()> {
    let config = operator.show_config(config_toml)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": paths::source_label(path),
            "prompt": config.prompt,
            "database": config.database,
            "table": config.table,
            "server": {
                "address": config.server_address,
                "instance_metadata": config.instance_metadata,
            },
            "llm": {
                "model": config.model,
                "api_url": config.api_url,
                "temperature": config.temperature,
                "timeout_secs": config.timeout_secs,
                "api_key_loaded": config.api_key_loaded,
            },
            "generator": {
                "max_attempts": config.max_attempts,
                "history_capacity": config.history_capacity,
            },
            "logging": {
                "level": config.log_level,
                "format": config.log_format,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", paths::source_label(path));
    output::field("Prompt", &config.prompt);

    output::section("Storage");
    output::field("Database", &config.database);
    output::field("Table", &config.table);

    output::section("Server");
    output::field("Address", &config.server_address);
    output::field(
        "Instance IP",
        if config.instance_metadata {
            "lookup"
        } else {
            "off"
        },
    );

    output::section("Gemini");
    output::field("Model", &config.model);
    output::field("API", &config.api_url);
    output::field("Temperature", config.temperature);
    output::field("Timeout", format!("{}s", config.timeout_secs));
    if config.api_key_loaded {
        output::success("API key loaded from GEMINI_API_KEY");
    } else {
        output::warning("GEMINI_API_KEY not set");
    }

    output::section("Generator");
    output::field("Max attempts", config.max_attempts);
    output::field("History", config.history_capacity);

    output::section("Logging");
    output::field("Level", &config.log_level);
    output::field("Format", &config.log_format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(
    operator: &dyn OperatorPort,
    config_toml: Option<&str>,
    path: Option<&Path>,
) -> Result<()> {
    let report = operator.validate_config(config_toml)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "source": paths::source_label(path),
            "valid": true,
            "warnings": report.warnings,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", paths::source_label(path));
    output::success("Config is valid");

    if !report.warnings.is_empty() {
        output::section("Warnings");
        for warning in &report.warnings {
            output::warning(warning);
        }
    }

    Ok(())
}
