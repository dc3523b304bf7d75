/// Tabula version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier of the in-memory reference backend.
pub const MOCK_BACKEND: &str = "mock";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "TABULA_LOG";

/// Filter used when `TABULA_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "tabula=info";

/// Log levels accepted by `LoggingConfig`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
