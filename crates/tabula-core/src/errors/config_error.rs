//! Configuration errors.

use super::error_code::{self, TabulaErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Tabula config {path} could not be read: {reason}")]
    FileNotFound { path: String, reason: String },

    #[error("Tabula config {path} is not valid TOML: {message}")]
    ParseError { path: String, message: String },

    #[error("Tabula config field {field} rejected: {message}")]
    ValidationFailed { field: String, message: String },
}

impl TabulaErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
