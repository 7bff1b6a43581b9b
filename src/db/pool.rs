//! Lazily opened SQLite connection.
//!
//! The connection is opened (and the schema ensured) on first use and then
//! kept for the lifetime of the pool. A failed open is not memoized, the
//! next call tries again.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

pub struct DbPool {
    path: PathBuf,
    conn: Mutex<Option<Connection>>,
}

impl DbPool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Helper to execute a closure with the (lazily opened) connection.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let mut guard = self.conn.lock().unwrap_or_else(PoisonError::into_inner);

        if guard.is_none() {
            debug!(path = %self.path.display(), "opening database");
            let conn = Connection::open(&self.path)?;
            init_db(&conn)?;
            *guard = Some(conn);
        }

        let conn = guard
            .as_ref()
            .ok_or_else(|| AppError::Other("database connection unavailable".into()))?;
        func(conn)
    }
}
