//! Config file resolution for CLI commands.
//!
//! An explicit `--config` path must exist. Without one, `config.toml` in the
//! working directory is used when present; otherwise commands run on
//! defaults plus environment.

use std::path::{Path, PathBuf};

use super::command::DEFAULT_CONFIG_PATH;
use crate::error::{ConfigError, Result};

/// Pick the config file to read, if any.
#[must_use]
pub fn resolve_config(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        fallback.exists().then(|| fallback.to_path_buf())
    })
}

/// Read config TOML from disk for operator-facing use-cases.
pub fn read_config_toml(path: Option<&Path>) -> Result<Option<String>> {
    path.map(|path| std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile(e).into()))
        .transpose()
}

/// Display label for where configuration came from.
#[must_use]
pub fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = PathBuf::from("elsewhere.toml");
        assert_eq!(resolve_config(Some(path.clone())), Some(path));
    }

    #[test]
    fn missing_explicit_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = read_config_toml(Some(&path));
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::ReadFile(_)))
        ));
    }

    #[test]
    fn reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "table = \"t\"").unwrap();

        assert_eq!(
            read_config_toml(Some(&path)).unwrap().as_deref(),
            Some("table = \"t\"")
        );
        assert_eq!(read_config_toml(None).unwrap(), None);
    }

    #[test]
    fn source_label_defaults() {
        assert_eq!(source_label(None), "(defaults)");
        assert_eq!(source_label(Some(Path::new("a/b.toml"))), "a/b.toml");
    }
}
