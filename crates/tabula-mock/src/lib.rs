//! # tabula-mock
//!
//! In-memory reference backend for the Tabula contracts. Nothing to connect
//! to: tables live in a map owned by the connection and vanish with it.
//! Useful to check that the contracts make sense and as a test double for
//! code written against `tabula_core::Connection`.

pub mod connection;
pub mod table;

pub use connection::MockConnection;
pub use table::MockTable;
