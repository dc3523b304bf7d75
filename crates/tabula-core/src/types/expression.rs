//! Read selectors.
//!
//! An `Expression` names one or more columns to project out of a table. It
//! never carries a value and has no behavior beyond equality and enumeration
//! of the columns it references; each backend translates it into whatever
//! native query shape it needs.

use serde::{Deserialize, Serialize};

use super::Attribute;

/// A reference to one column, either by bare name or through its definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRef {
    Name(String),
    Attribute(Attribute),
}

impl ColumnRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Attribute(attr) => &attr.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    /// A single column.
    Column(ColumnRef),
    /// An ordered sequence of selectors. Backends accept only flat
    /// sequences of columns; an empty one selects nothing.
    Sequence(Vec<Expression>),
}

impl Expression {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::Name(name.into()))
    }

    pub fn attribute(attr: Attribute) -> Self {
        Self::Column(ColumnRef::Attribute(attr))
    }

    pub fn columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(names.into_iter().map(Self::column).collect())
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Every column name referenced, in selector order, nested sequences
    /// flattened depth-first.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Column(col) => out.push(col.name()),
            Self::Sequence(items) => {
                for item in items {
                    item.collect_names(out);
                }
            }
        }
    }
}

impl From<&str> for Expression {
    fn from(name: &str) -> Self {
        Self::column(name)
    }
}

impl From<String> for Expression {
    fn from(name: String) -> Self {
        Self::column(name)
    }
}

impl From<Attribute> for Expression {
    fn from(attr: Attribute) -> Self {
        Self::attribute(attr)
    }
}

impl From<Vec<&str>> for Expression {
    fn from(names: Vec<&str>) -> Self {
        Self::columns(names)
    }
}

impl From<Vec<Expression>> for Expression {
    fn from(items: Vec<Expression>) -> Self {
        Self::Sequence(items)
    }
}
