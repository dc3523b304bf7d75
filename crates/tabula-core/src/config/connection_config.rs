use serde::{Deserialize, Serialize};

use super::defaults;

/// Which backend to build and how it should behave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Backend identifier, e.g. "mock".
    pub backend: String,
    /// Human-readable name attached to log lines for this connection.
    pub label: String,
    /// Make `connect` fail as if the backend could not be reached.
    pub simulate_unreachable: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_BACKEND.to_string(),
            label: defaults::DEFAULT_LABEL.to_string(),
            simulate_unreachable: defaults::DEFAULT_SIMULATE_UNREACHABLE,
        }
    }
}
