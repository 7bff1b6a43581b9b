//! Location store: the single owner of the `locations` table.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{count_locations, insert_location, load_all_locations};
use crate::errors::AppResult;
use crate::models::location::{Coordinates, LocationRecord};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct LocationStore {
    pool: DbPool,
}

impl LocationStore {
    /// Build a store for the database at `path`. Nothing is opened until the
    /// first operation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            pool: DbPool::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.pool.path()
    }

    /// Create the `locations` table if absent. Any number of calls leave
    /// exactly one table behind.
    pub fn ensure_schema(&self) -> AppResult<()> {
        self.pool.with_conn(init_db)
    }

    /// Persist one captured point. Engine failures are returned to the caller.
    pub fn insert(&self, uid: &Uuid, coords: &Coordinates) -> AppResult<LocationRecord> {
        let record = self
            .pool
            .with_conn(|conn| insert_location(conn, uid, coords))?;
        debug!(id = record.id, uid = %record.uid, "location stored");
        Ok(record)
    }

    /// One-shot snapshot of every record, newest first.
    pub fn list_all(&self) -> AppResult<Vec<LocationRecord>> {
        self.pool.with_conn(load_all_locations)
    }

    pub fn count(&self) -> AppResult<usize> {
        self.pool.with_conn(count_locations)
    }
}
