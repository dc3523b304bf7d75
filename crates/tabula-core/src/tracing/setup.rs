//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the Tabula tracing/logging system.
///
/// Reads the `TABULA_LOG` environment variable for per-module log levels.
/// Format: `TABULA_LOG=tabula_core=debug,tabula_mock=trace`
///
/// Falls back to `tabula=info` if `TABULA_LOG` is not set or is invalid.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    install(EnvFilter::new(DEFAULT_LOG_FILTER));
}

/// Like `init_tracing`, but falls back to `config.log_level` for every
/// `tabula*` target instead of `info`.
pub fn init_tracing_with(config: &LoggingConfig) {
    install(EnvFilter::new(format!("tabula={}", config.log_level)));
}

fn install(fallback: EnvFilter) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or(fallback);

        // The host application may already own the global subscriber.
        if let Err(e) = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init()
        {
            ::tracing::debug!(error = %e, "global subscriber already installed, keeping it");
        }
    });
}
