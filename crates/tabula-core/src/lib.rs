//! # tabula-core
//!
//! Foundation crate for the Tabula database access contract.
//! Defines the value model, the `Connection` and `Table` traits, the
//! backend-agnostic `Session` and `Querier`, errors, config, and tracing.
//! Every backend crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod querier;
pub mod session;
pub mod tracing;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use config::TabulaConfig;
pub use errors::{TabulaError, TabulaResult};
pub use querier::{with_querier, Querier};
pub use session::{with_session, Session};
pub use traits::{Connection, Table};
pub use types::{Assignment, Attribute, Cell, DataType, Expression, Schema, Selection, Value};
