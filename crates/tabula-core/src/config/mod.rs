//! Configuration system for Tabula.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod connection_config;
pub mod defaults;
pub mod logging_config;
pub mod tabula_config;

pub use connection_config::ConnectionConfig;
pub use logging_config::LoggingConfig;
pub use tabula_config::TabulaConfig;
