//! CLI configuration
//!
//! Settings come from `dialogspec.toml` (in the working directory, or the
//! file named by `--config`), and command-line flags override them. Flags
//! also read `DIALOGSPEC_*` environment variables through clap.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "dialogspec.toml";

/// How validation results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings shared by the validating commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Treat lint warnings as failures
    pub strict: bool,
    /// Stop at the first invalid field in each file
    pub fail_fast: bool,
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Load the explicit config file, or `dialogspec.toml` from `dir` if it
    /// exists, or the defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides
    ///
    /// Boolean flags can only switch a setting on.
    pub fn with_overrides(
        mut self,
        strict: bool,
        fail_fast: bool,
        format: Option<OutputFormat>,
    ) -> Self {
        self.strict |= strict;
        self.fail_fast |= fail_fast;
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_discover_in_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "strict = true\nformat = \"json\"\n",
        )
        .unwrap();

        let config = CliConfig::discover(None, dir.path()).unwrap();
        assert!(config.strict);
        assert!(!config.fail_fast);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_explicit_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("other.toml");
        let err = CliConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "colour = true\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig {
            strict: true,
            fail_fast: false,
            format: OutputFormat::Json,
        }
        .with_overrides(false, true, Some(OutputFormat::Text));

        assert!(config.strict);
        assert!(config.fail_fast);
        assert_eq!(config.format, OutputFormat::Text);
    }
}
