use rusqlite::{Connection, OptionalExtension, Result, params};
use tracing::{info, warn};
use uuid::Uuid;

/// Check if the `locations` table exists.
fn locations_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='locations'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `locations` table has a `uid` column.
fn locations_has_uid_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('locations')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "uid" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Upgrade a `locations` table written before capture-time identifiers
/// existed: `(id, latitude, longitude)` only.
///
/// Adds the `uid` column, gives every existing row a fresh v4 UUID and
/// enforces uniqueness with an index, since SQLite cannot add a UNIQUE
/// column through ALTER TABLE.
pub fn upgrade_legacy_locations(conn: &Connection) -> Result<()> {
    if !locations_table_exists(conn)? {
        return Ok(());
    }

    if locations_has_uid_column(conn)? {
        return Ok(());
    }

    warn!("legacy locations table detected, adding uid column");

    let tx = conn.unchecked_transaction()?;
    tx.execute("ALTER TABLE locations ADD COLUMN uid TEXT", [])?;

    let ids: Vec<i64> = {
        let mut stmt = tx.prepare("SELECT id FROM locations WHERE uid IS NULL")?;
        stmt.query_map([], |row| row.get::<_, i64>(0))?
            .collect::<Result<_>>()?
    };

    for id in &ids {
        tx.execute(
            "UPDATE locations SET uid = ?1 WHERE id = ?2",
            params![Uuid::new_v4().to_string(), id],
        )?;
    }

    tx.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_locations_uid ON locations(uid)",
        [],
    )?;
    tx.commit()?;

    info!(rows = ids.len(), "legacy locations table upgraded");
    Ok(())
}
