//! Top-level Tabula configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConnectionConfig, LoggingConfig};
use crate::constants::LOG_LEVELS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TABULA_*`)
/// 2. Config file passed to `load`
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabulaConfig {
    pub connection: ConnectionConfig,
    pub logging: LoggingConfig,
}

impl TabulaConfig {
    /// Load configuration: defaults, then `path` if given, then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileNotFound {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connection.backend.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "connection.backend".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.logging.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "logging.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `TABULA_BACKEND`, `TABULA_LABEL`, `TABULA_LOG_LEVEL`.
    fn apply_env_overrides(config: &mut TabulaConfig) {
        if let Ok(val) = std::env::var("TABULA_BACKEND") {
            config.connection.backend = val;
        }
        if let Ok(val) = std::env::var("TABULA_LABEL") {
            config.connection.label = val;
        }
        if let Ok(val) = std::env::var("TABULA_LOG_LEVEL") {
            config.logging.log_level = val.to_lowercase();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
