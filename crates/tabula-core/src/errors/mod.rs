//! Error handling for Tabula.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod connection_error;
pub mod error_code;
pub mod table_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use connection_error::ConnectionError;
pub use error_code::TabulaErrorCode;
pub use table_error::TableError;

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TabulaError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TabulaErrorCode for TabulaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Connection(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type TabulaResult<T> = Result<T, TabulaError>;
