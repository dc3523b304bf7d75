// Single source of truth for all default values.

// --- Connection ---
pub const DEFAULT_BACKEND: &str = crate::constants::MOCK_BACKEND;
pub const DEFAULT_LABEL: &str = "default";
pub const DEFAULT_SIMULATE_UNREACHABLE: bool = false;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
