//! Stable error codes for callers that match on strings rather than types.

/// Every error enum implements this to expose a structured code string.
pub trait TabulaErrorCode {
    /// Returns the error code string (e.g., "TABLE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONNECTION_ERROR: &str = "CONNECTION_ERROR";
pub const DUPLICATE_TABLE: &str = "DUPLICATE_TABLE";
pub const TABLE_NOT_FOUND: &str = "TABLE_NOT_FOUND";
pub const UNKNOWN_COLUMN: &str = "UNKNOWN_COLUMN";
pub const DUPLICATE_COLUMN: &str = "DUPLICATE_COLUMN";
pub const MISSING_REQUIRED_VALUE: &str = "MISSING_REQUIRED_VALUE";
pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
pub const UNSUPPORTED_SELECTOR: &str = "UNSUPPORTED_SELECTOR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
