//! Value model shared by every backend: types, values, schemas, selectors.

pub mod assignment;
pub mod attribute;
pub mod expression;
pub mod schema;
pub mod selection;
pub mod value;

pub use assignment::Assignment;
pub use attribute::Attribute;
pub use expression::{ColumnRef, Expression};
pub use schema::Schema;
pub use selection::Selection;
pub use value::{Cell, DataType, Value};
