//! Row access errors raised by `Table::get` and `Table::set`.

use super::error_code::{self, TabulaErrorCode};
use crate::types::DataType;

/// Errors that can occur while reading or writing table rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Unknown column '{column}' in table '{table}'")]
    UnknownColumn { table: String, column: String },

    #[error("Column '{column}' given more than once for table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// `columns` is sorted and holds every missing column of the call.
    #[error("Missing required value for table '{table}': {}", .columns.join(", "))]
    MissingRequiredValue { table: String, columns: Vec<String> },

    #[error("Type mismatch for column '{column}' in table '{table}': expected {expected}, got {actual}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: DataType,
        actual: DataType,
    },

    #[error("Unsupported selector for table '{table}': {reason}")]
    UnsupportedSelector { table: String, reason: String },
}

impl TabulaErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownColumn { .. } => error_code::UNKNOWN_COLUMN,
            Self::DuplicateColumn { .. } => error_code::DUPLICATE_COLUMN,
            Self::MissingRequiredValue { .. } => error_code::MISSING_REQUIRED_VALUE,
            Self::TypeMismatch { .. } => error_code::TYPE_MISMATCH,
            Self::UnsupportedSelector { .. } => error_code::UNSUPPORTED_SELECTOR,
        }
    }
}
