use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Attribute;
use crate::errors::TableError;

/// The set of column definitions shaping a table.
///
/// Column names are unique. There are no mutators: a table's columns are
/// fixed once the table is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Attribute>", into = "Vec<Attribute>")]
pub struct Schema {
    attributes: Vec<Attribute>,
}

impl Schema {
    /// Build a schema, rejecting repeated column names.
    pub fn new(attributes: Vec<Attribute>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(attributes.len());
        for attr in &attributes {
            if !seen.insert(attr.name.as_str()) {
                return Err(TableError::DuplicateColumn {
                    table: "<schema>".to_string(),
                    column: attr.name.clone(),
                });
            }
        }
        Ok(Self { attributes })
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Declaration index of a column, used by backends to address storage.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn required_columns(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.required)
    }
}

impl TryFrom<Vec<Attribute>> for Schema {
    type Error = TableError;

    fn try_from(attributes: Vec<Attribute>) -> Result<Self, Self::Error> {
        Self::new(attributes)
    }
}

impl From<Schema> for Vec<Attribute> {
    fn from(schema: Schema) -> Self {
        schema.attributes
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
