use super::Cell;

/// Result of `Table::get`.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Full stored sequence of a single selected column.
    Column(Vec<Cell>),
    /// Per-column sequences, in the order the selector listed them.
    Columns(Vec<Vec<Cell>>),
}

impl Selection {
    /// The single-column sequence, if this came from a single-column selector.
    pub fn into_column(self) -> Option<Vec<Cell>> {
        match self {
            Self::Column(cells) => Some(cells),
            Self::Columns(_) => None,
        }
    }

    /// Per-column sequences; a single-column result becomes a one-element list.
    pub fn into_columns(self) -> Vec<Vec<Cell>> {
        match self {
            Self::Column(cells) => vec![cells],
            Self::Columns(columns) => columns,
        }
    }

    /// Number of columns carried.
    pub fn width(&self) -> usize {
        match self {
            Self::Column(_) => 1,
            Self::Columns(columns) => columns.len(),
        }
    }
}
