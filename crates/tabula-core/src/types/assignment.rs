use super::Value;

/// One `(column, value)` pair of a row write.
///
/// `value: None` means the caller explicitly supplied no value. That is
/// accepted for optional columns (stored as the absent marker) and rejected
/// for required ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Option<Value>,
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: Some(value.into()),
        }
    }

    pub fn absent(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: None,
        }
    }
}

impl<V: Into<Value>> From<(&str, V)> for Assignment {
    fn from((column, value): (&str, V)) -> Self {
        Self::new(column, value)
    }
}
