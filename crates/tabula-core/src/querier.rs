//! Name-to-table facade over a single connection.

use tracing::{debug, warn};

use crate::errors::{CatalogError, ConnectionError};
use crate::session::Session;
use crate::traits::{Connection, Table};
use crate::types::Schema;

/// Resolves logical table names against one bound connection and routes
/// table creation to it.
///
/// The querier's scope is the connection's scope: opening one opens a
/// `Session`, dropping it releases that session. It holds no other state.
pub struct Querier<'c, C: Connection> {
    session: Session<'c, C>,
}

impl<'c, C: Connection> Querier<'c, C> {
    pub fn open(conn: &'c mut C) -> Result<Self, ConnectionError> {
        Ok(Self {
            session: Session::open(conn)?,
        })
    }

    pub fn connection(&self) -> &C {
        &self.session
    }

    pub fn table_names(&self) -> Vec<String> {
        self.session.table_names()
    }

    /// Resolve `name` among the connection's tables.
    pub fn lookup(&self, name: &str) -> Result<&C::Table, CatalogError> {
        self.session
            .get_tables()
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| not_found(name))
    }

    pub fn lookup_mut(&mut self, name: &str) -> Result<&mut C::Table, CatalogError> {
        self.session
            .get_tables_mut()
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| not_found(name))
    }

    /// Build an empty table with `schema` and register it on the connection.
    pub fn create(&mut self, name: &str, schema: Schema) -> Result<&mut C::Table, CatalogError> {
        let table = <C::Table as Table>::with_schema(name, schema);
        match self.session.create_table(table) {
            Ok(table) => {
                debug!(table = name, "table created through querier");
                Ok(table)
            }
            Err(e) => {
                warn!(table = name, error = %e, "table creation rejected");
                Err(e)
            }
        }
    }

    /// Release the underlying session now.
    pub fn close(self) {}
}

fn not_found(name: &str) -> CatalogError {
    CatalogError::TableNotFound {
        name: name.to_string(),
    }
}

/// Run `body` with a querier bound to `conn`, releasing the connection's
/// session however `body` exits.
pub fn with_querier<C, T, E, F>(conn: &mut C, body: F) -> Result<T, E>
where
    C: Connection,
    E: From<ConnectionError>,
    F: FnOnce(&mut Querier<'_, C>) -> Result<T, E>,
{
    let mut querier = Querier::open(conn)?;
    body(&mut querier)
}
