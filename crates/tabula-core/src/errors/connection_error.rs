//! Connection lifecycle errors.

use super::error_code::{self, TabulaErrorCode};

/// Errors raised while establishing a backend session.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Backend '{backend}' unreachable: {reason}")]
    Unreachable { backend: String, reason: String },
}

impl TabulaErrorCode for ConnectionError {
    fn error_code(&self) -> &'static str {
        error_code::CONNECTION_ERROR
    }
}
