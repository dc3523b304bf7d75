//! Table registry errors.

use super::error_code::{self, TabulaErrorCode};

/// Errors raised when creating or resolving tables by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Table '{name}' already exists")]
    DuplicateTable { name: String },

    #[error("Database table '{name}' not found")]
    TableNotFound { name: String },
}

impl TabulaErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateTable { .. } => error_code::DUPLICATE_TABLE,
            Self::TableNotFound { .. } => error_code::TABLE_NOT_FOUND,
        }
    }
}
