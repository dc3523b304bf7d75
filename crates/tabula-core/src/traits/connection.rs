use crate::errors::{CatalogError, ConnectionError};
use crate::traits::Table;

/// A backend session that owns a registry of uniquely named tables.
///
/// `connect`/`disconnect` are the backend hooks. Callers should not invoke
/// them directly; `Session` guards them with the `is_connected` flag and
/// guarantees release on every exit path.
pub trait Connection {
    type Table: Table;

    /// Short backend identifier used in errors and logs.
    fn backend_name(&self) -> &str;

    /// Establish the session. On success `is_connected` returns true.
    fn connect(&mut self) -> Result<(), ConnectionError>;

    /// Tear the session down. Afterwards `is_connected` returns false.
    fn disconnect(&mut self);

    fn is_connected(&self) -> bool;

    /// Every table created so far, in a stable order.
    fn get_tables(&self) -> Vec<&Self::Table>;

    fn get_tables_mut(&mut self) -> Vec<&mut Self::Table>;

    /// Register `table` under its name. Fails with `DuplicateTable`, leaving
    /// the registry untouched, if the name is taken.
    fn create_table(&mut self, table: Self::Table) -> Result<&mut Self::Table, CatalogError>;

    fn table_names(&self) -> Vec<String> {
        self.get_tables()
            .into_iter()
            .map(|t| t.name().to_string())
            .collect()
    }

    fn has_table(&self, name: &str) -> bool {
        self.get_tables().into_iter().any(|t| t.name() == name)
    }
}
