use crate::errors::AppResult;
use crate::models::location::{Coordinates, LocationRecord};
use rusqlite::{Connection, Result, Row, params};
use uuid::Uuid;

pub fn map_row(row: &Row) -> Result<LocationRecord> {
    let uid_str: String = row.get("uid")?;
    let uid = Uuid::parse_str(&uid_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(LocationRecord {
        id: row.get("id")?,
        uid,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}

pub fn insert_location(
    conn: &Connection,
    uid: &Uuid,
    coords: &Coordinates,
) -> AppResult<LocationRecord> {
    let latitude = coords.latitude_text();
    let longitude = coords.longitude_text();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO locations (uid, latitude, longitude)
         VALUES (?1, ?2, ?3)",
    )?;
    stmt.execute(params![uid.to_string(), latitude, longitude])?;

    Ok(LocationRecord {
        id: conn.last_insert_rowid(),
        uid: *uid,
        latitude,
        longitude,
    })
}

/// All records, most recently inserted first.
pub fn load_all_locations(conn: &Connection) -> AppResult<Vec<LocationRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, uid, latitude, longitude
         FROM locations
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_locations(conn: &Connection) -> AppResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM locations", [], |row| row.get(0))?;
    Ok(n as usize)
}
