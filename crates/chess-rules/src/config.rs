//! Rules configuration loading.
//!
//! The rule set has a single tunable: how attacked squares are determined when
//! deciding whether castling is allowed. It can be set from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::movegen::AttackGeometry;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration for [`StandardChess`](crate::StandardChess).
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesConfig {
    /// `"quiet-moves"` (default) or `"threats"`.
    #[serde(default)]
    pub attack_geometry: AttackGeometry,
}

impl RulesConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::from_path(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reads and parses the configuration file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the path to the configuration file: `rules.toml` in the current
    /// working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("rules.toml")
    }
}
