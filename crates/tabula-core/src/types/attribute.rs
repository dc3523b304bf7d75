use serde::{Deserialize, Serialize};

use super::DataType;

/// Definition of one column: its name, declared type, and whether every row
/// must supply a value for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub data_type: DataType,
    pub required: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, data_type: DataType, required: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            required,
        }
    }

    pub fn required(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type, true)
    }

    pub fn optional(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type, false)
    }
}
