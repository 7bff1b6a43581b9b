use crate::db::migrate::upgrade_legacy_locations;
use crate::errors::AppResult;
use rusqlite::Connection;

const SQL_CREATE: &str = r#"
    CREATE TABLE IF NOT EXISTS locations (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        uid       TEXT NOT NULL UNIQUE,
        latitude  TEXT NOT NULL,
        longitude TEXT NOT NULL
    );
"#;

/// Create the `locations` table if absent.
/// Idempotent: safe to run before every operation.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    // Legacy first: CREATE IF NOT EXISTS is a no-op on an old table.
    upgrade_legacy_locations(conn)?;
    conn.execute_batch(SQL_CREATE)?;
    Ok(())
}
