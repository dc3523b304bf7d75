//! MockTable: per-column cell vectors, implements `Table`.

use tracing::{debug, trace, warn};

use tabula_core::errors::TableError;
use tabula_core::traits::Table;
use tabula_core::types::{Assignment, Cell, Expression, Schema, Selection};
use tabula_core::validation::{resolve_selector, validate_row, ResolvedSelector};

/// Columnar in-memory table. `columns[i]` stores the cells of the schema's
/// i-th attribute; every column has exactly `rows` cells.
#[derive(Debug, Clone)]
pub struct MockTable {
    name: String,
    schema: Schema,
    columns: Vec<Vec<Cell>>,
    rows: usize,
}

impl MockTable {
    /// Stored cells of one column, by name.
    pub fn column(&self, name: &str) -> Result<&[Cell], TableError> {
        self.schema
            .position(name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| TableError::UnknownColumn {
                table: self.name.clone(),
                column: name.to_string(),
            })
    }

    /// Lengths of every column's stored sequence, in schema order.
    pub fn column_lengths(&self) -> Vec<usize> {
        self.columns.iter().map(Vec::len).collect()
    }
}

impl Table for MockTable {
    fn with_schema(name: impl Into<String>, schema: Schema) -> Self {
        let columns = vec![Vec::new(); schema.len()];
        Self {
            name: name.into(),
            schema,
            columns,
            rows: 0,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn get(&self, expr: &Expression) -> Result<Selection, TableError> {
        let selection = match resolve_selector(&self.name, &self.schema, expr)? {
            ResolvedSelector::Single(i) => Selection::Column(self.columns[i].clone()),
            ResolvedSelector::Multi(positions) => Selection::Columns(
                positions
                    .into_iter()
                    .map(|i| self.columns[i].clone())
                    .collect(),
            ),
        };
        trace!(table = %self.name, width = selection.width(), "columns read");
        Ok(selection)
    }

    fn set(&mut self, row: &[Assignment]) -> Result<(), TableError> {
        let cells = validate_row(&self.name, &self.schema, row).map_err(|e| {
            warn!(table = %self.name, error = %e, "row rejected");
            e
        })?;

        for (column, cell) in self.columns.iter_mut().zip(cells) {
            column.push(cell);
        }
        self.rows += 1;
        debug!(table = %self.name, rows = self.rows, "row inserted");
        Ok(())
    }
}
