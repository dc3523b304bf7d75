//! MockConnection: owns the table registry, implements `Connection`.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use tabula_core::config::defaults::DEFAULT_LABEL;
use tabula_core::config::ConnectionConfig;
use tabula_core::constants::MOCK_BACKEND;
use tabula_core::errors::{CatalogError, ConfigError, ConnectionError};
use tabula_core::traits::{Connection, Table};

use crate::table::MockTable;

/// Single-threaded, single-writer in-memory connection.
///
/// Tables are kept sorted by name, which is the enumeration order of
/// `get_tables`.
#[derive(Debug)]
pub struct MockConnection {
    label: String,
    connected: bool,
    simulate_unreachable: bool,
    tables: BTreeMap<String, MockTable>,
}

impl Default for MockConnection {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            connected: false,
            simulate_unreachable: false,
            tables: BTreeMap::new(),
        }
    }
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a connection from config. Only the `mock` backend is accepted.
    pub fn from_config(config: &ConnectionConfig) -> Result<Self, ConfigError> {
        if config.backend != MOCK_BACKEND {
            return Err(ConfigError::ValidationFailed {
                field: "connection.backend".to_string(),
                message: format!(
                    "backend '{}' is not served by the mock connection",
                    config.backend
                ),
            });
        }
        Ok(Self {
            label: config.label.clone(),
            simulate_unreachable: config.simulate_unreachable,
            ..Self::default()
        })
    }

    /// A connection whose `connect` always fails with `Unreachable`.
    pub fn unreachable() -> Self {
        Self {
            simulate_unreachable: true,
            ..Self::default()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl Connection for MockConnection {
    type Table = MockTable;

    fn backend_name(&self) -> &str {
        MOCK_BACKEND
    }

    fn connect(&mut self) -> Result<(), ConnectionError> {
        if self.simulate_unreachable {
            warn!(label = %self.label, "mock backend configured as unreachable");
            return Err(ConnectionError::Unreachable {
                backend: MOCK_BACKEND.to_string(),
                reason: "simulated outage".to_string(),
            });
        }
        self.connected = true;
        debug!(label = %self.label, "mock connected");
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
        debug!(label = %self.label, "mock disconnected");
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn get_tables(&self) -> Vec<&MockTable> {
        self.tables.values().collect()
    }

    fn get_tables_mut(&mut self) -> Vec<&mut MockTable> {
        self.tables.values_mut().collect()
    }

    fn create_table(&mut self, table: MockTable) -> Result<&mut MockTable, CatalogError> {
        use std::collections::btree_map::Entry;

        match self.tables.entry(table.name().to_string()) {
            Entry::Occupied(entry) => {
                warn!(table = %entry.key(), "duplicate table rejected");
                Err(CatalogError::DuplicateTable {
                    name: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                debug!(
                    table = %entry.key(),
                    columns = table.schema().len(),
                    "table registered"
                );
                Ok(entry.insert(table))
            }
        }
    }

    // Direct map hit instead of the provided linear scan.
    fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }
}
