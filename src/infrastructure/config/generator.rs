//! Quote generator tuning.

use serde::Deserialize;

use crate::application::generator::DEFAULT_MAX_ATTEMPTS;
use crate::domain::history::DEFAULT_HISTORY_CAPACITY;

/// Retry budget and history window size for the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Backend calls per generate before giving up. Defaults to 3.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Recent quotes sent back as context. Defaults to 15.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            history_capacity: default_history_capacity(),
        }
    }
}

const fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

const fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}
