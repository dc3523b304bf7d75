//! Schema enforcement shared by every backend.
//!
//! `validate_row` and `resolve_selector` encode the read/write protocol of
//! the `Table` contract so that backends only decide where cells live.

use std::collections::HashSet;

use crate::errors::TableError;
use crate::types::{Assignment, Cell, ColumnRef, Expression, Schema};

/// Shape of a resolved selector: schema positions of the selected columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSelector {
    Single(usize),
    Multi(Vec<usize>),
}

/// Validate one row write against `schema` and materialize it as one cell per
/// column, in schema order.
///
/// Checks run per assignment in this order: unknown column, repeated column,
/// required column given no value, type mismatch. Required columns that the
/// call never mentions are reported together, sorted, after the scan. Nothing
/// is returned on failure, so callers that only mutate on `Ok` insert rows
/// all-or-nothing.
pub fn validate_row(
    table: &str,
    schema: &Schema,
    row: &[Assignment],
) -> Result<Vec<Cell>, TableError> {
    let mut cells: Vec<Cell> = vec![None; schema.len()];
    let mut covered: HashSet<&str> = HashSet::with_capacity(row.len());

    for assignment in row {
        let column = assignment.column.as_str();
        let position = schema
            .position(column)
            .ok_or_else(|| TableError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            })?;

        if !covered.insert(column) {
            return Err(TableError::DuplicateColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }

        let attr = &schema.attributes()[position];
        match &assignment.value {
            None if attr.required => {
                return Err(TableError::MissingRequiredValue {
                    table: table.to_string(),
                    columns: vec![column.to_string()],
                });
            }
            None => {}
            Some(value) => {
                let actual = value.data_type();
                if actual != attr.data_type {
                    return Err(TableError::TypeMismatch {
                        table: table.to_string(),
                        column: column.to_string(),
                        expected: attr.data_type,
                        actual,
                    });
                }
                cells[position] = Some(value.clone());
            }
        }
    }

    let mut missing: Vec<String> = schema
        .required_columns()
        .filter(|attr| !covered.contains(attr.name.as_str()))
        .map(|attr| attr.name.clone())
        .collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(TableError::MissingRequiredValue {
            table: table.to_string(),
            columns: missing,
        });
    }

    Ok(cells)
}

/// Resolve a read selector to schema positions.
///
/// A column reference yields `Single`; a flat sequence of column references
/// yields `Multi` in selector order (an empty sequence selects nothing).
/// Nested sequences are `UnsupportedSelector`. Any name outside the schema
/// is `UnknownColumn`.
pub fn resolve_selector(
    table: &str,
    schema: &Schema,
    expr: &Expression,
) -> Result<ResolvedSelector, TableError> {
    let locate = |col: &ColumnRef| {
        schema
            .position(col.name())
            .ok_or_else(|| TableError::UnknownColumn {
                table: table.to_string(),
                column: col.name().to_string(),
            })
    };

    match expr {
        Expression::Column(col) => locate(col).map(ResolvedSelector::Single),
        Expression::Sequence(items) => {
            let mut positions = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Expression::Column(col) => positions.push(locate(col)?),
                    Expression::Sequence(_) => {
                        return Err(TableError::UnsupportedSelector {
                            table: table.to_string(),
                            reason: "nested column sequence".to_string(),
                        });
                    }
                }
            }
            Ok(ResolvedSelector::Multi(positions))
        }
    }
}
