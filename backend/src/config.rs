//! Data-source configuration.
//!
//! The record file location is carried in an explicit [`DataConfig`] value
//! and handed to the store and services at call time; there is no
//! process-global configuration.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming the presence record file.
pub const DATA_CSV_ENV: &str = "PRESENCE_DATA_CSV";

/// Errors raised while building a [`DataConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("{0} environment variable not set")]
    MissingEnvVar(&'static str),

    /// The configuration file cannot be read.
    #[error("cannot read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or misses required keys.
    #[error("invalid config file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Location of the presence record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// Path of the comma-separated presence record file.
    pub presence_csv: PathBuf,
}

impl DataConfig {
    /// Configuration with an explicitly supplied record-file path.
    pub fn new(presence_csv: impl Into<PathBuf>) -> Self {
        Self {
            presence_csv: presence_csv.into(),
        }
    }

    /// Read the record-file path from the `PRESENCE_DATA_CSV` environment
    /// variable.
    ///
    /// # Errors
    /// Returns an error if the variable is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let presence_csv = env::var(DATA_CSV_ENV)
            .map_err(|_| ConfigError::MissingEnvVar(DATA_CSV_ENV))?;
        Ok(Self::new(presence_csv))
    }

    /// Load the configuration from a TOML file of the shape:
    ///
    /// ```toml
    /// [data]
    /// presence_csv = "runtime/data/presence.csv"
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: ConfigFile =
            toml::from_str(&raw).map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            presence_csv: parsed.data.presence_csv,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    data: DataSection,
}

#[derive(Debug, Deserialize)]
struct DataSection {
    presence_csv: PathBuf,
}
