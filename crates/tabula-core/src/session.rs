//! Scoped acquisition of a backend session.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::errors::ConnectionError;
use crate::traits::Connection;

/// Holds a connection open for the lifetime of the guard.
///
/// Opening connects only if the connection is not already connected.
/// Dropping disconnects if it is still connected, whether the scope ended by
/// return, `?`, or panic unwind.
pub struct Session<'c, C: Connection> {
    conn: &'c mut C,
}

impl<'c, C: Connection> Session<'c, C> {
    pub fn open(conn: &'c mut C) -> Result<Self, ConnectionError> {
        if !conn.is_connected() {
            conn.connect()?;
            debug!(backend = conn.backend_name(), "session opened");
        }
        Ok(Self { conn })
    }

    /// Release the session now instead of at end of scope.
    pub fn close(self) {}
}

impl<C: Connection> Deref for Session<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.conn
    }
}

impl<C: Connection> DerefMut for Session<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.conn
    }
}

impl<C: Connection> Drop for Session<'_, C> {
    fn drop(&mut self) {
        if self.conn.is_connected() {
            self.conn.disconnect();
            debug!(backend = self.conn.backend_name(), "session closed");
        }
    }
}

/// Run `body` inside a session on `conn`, releasing it however `body` exits.
pub fn with_session<C, T, E, F>(conn: &mut C, body: F) -> Result<T, E>
where
    C: Connection,
    E: From<ConnectionError>,
    F: FnOnce(&mut C) -> Result<T, E>,
{
    let mut session = Session::open(conn)?;
    body(&mut *session)
}
