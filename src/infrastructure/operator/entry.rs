//! Operator entry type.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Infrastructure-backed implementation of the operator ports.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse config text, falling back to defaults plus environment.
    pub(crate) fn load(config_toml: Option<&str>) -> Result<Config> {
        Config::parse_toml(config_toml.unwrap_or_default())
    }
}
