use crate::errors::TableError;
use crate::types::{Assignment, Expression, Schema, Selection};

/// A named, schema-typed columnar store.
///
/// Rows are append-only and aligned across columns: after N successful
/// `set` calls every column holds exactly N cells.
pub trait Table {
    /// An empty table with the given name and schema.
    fn with_schema(name: impl Into<String>, schema: Schema) -> Self
    where
        Self: Sized;

    fn name(&self) -> &str;

    fn schema(&self) -> &Schema;

    fn row_count(&self) -> usize;

    /// Project one column (`Selection::Column`) or an ordered list of
    /// columns (`Selection::Columns`).
    fn get(&self, expr: &Expression) -> Result<Selection, TableError>;

    /// Insert one row. A failed call leaves the table unchanged.
    fn set(&mut self, row: &[Assignment]) -> Result<(), TableError>;
}
