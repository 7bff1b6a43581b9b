use locapture::db::LocationStore;
use locapture::models::Coordinates;
use rusqlite::Connection;
use std::collections::HashSet;
use tempfile::TempDir;
use uuid::Uuid;

fn temp_store() -> (TempDir, LocationStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = LocationStore::open(dir.path().join("store.sqlite"));
    (dir, store)
}

fn count_tables(store: &LocationStore) -> i64 {
    let conn = Connection::open(store.path()).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='locations'",
        [],
        |row| row.get(0),
    )
    .expect("count tables")
}

#[test]
fn test_open_is_lazy() {
    let (_dir, store) = temp_store();
    assert!(!store.path().exists());

    assert!(store.list_all().unwrap().is_empty());
    assert!(store.path().exists());
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let (_dir, store) = temp_store();

    for _ in 0..5 {
        store.ensure_schema().expect("ensure schema");
    }
    assert_eq!(count_tables(&store), 1);

    // a second store on the same file sees the same table
    let again = LocationStore::open(store.path());
    again.ensure_schema().expect("ensure schema again");
    assert_eq!(count_tables(&store), 1);
}

#[test]
fn test_insert_then_list_round_trip() {
    let (_dir, store) = temp_store();

    let points = [
        (37.4, -122.1),
        (0.0, 0.0),
        (-90.0, 180.0),
        (45.464_203_6, 9.189_982),
        (1e-7, -1e-7),
    ];

    for (lat, lon) in points {
        store
            .insert(&Uuid::new_v4(), &Coordinates::new(lat, lon))
            .expect("insert");
    }

    let stored = store.list_all().expect("list");
    assert_eq!(stored.len(), points.len());

    for (lat, lon) in points {
        let lat_s = lat.to_string();
        let lon_s = lon.to_string();
        assert!(
            stored
                .iter()
                .any(|r| r.latitude == lat_s && r.longitude == lon_s),
            "missing ({lat_s}, {lon_s})"
        );
    }
}

#[test]
fn test_insert_returns_stored_record() {
    let (_dir, store) = temp_store();
    let uid = Uuid::new_v4();

    let record = store
        .insert(&uid, &Coordinates::new(37.4, -122.1))
        .expect("insert");

    assert_eq!(record.uid, uid);
    assert_eq!(record.latitude, "37.4");
    assert_eq!(record.longitude, "-122.1");
    assert_eq!(store.list_all().unwrap(), vec![record]);
}

#[test]
fn test_list_all_is_newest_first() {
    let (_dir, store) = temp_store();

    let mut inserted = Vec::new();
    for i in 0..20 {
        let rec = store
            .insert(&Uuid::new_v4(), &Coordinates::new(i as f64, -(i as f64)))
            .expect("insert");
        inserted.push(rec);
    }

    let listed = store.list_all().unwrap();
    assert_eq!(listed.len(), 20);
    assert_eq!(listed[0], *inserted.last().unwrap());

    for pair in listed.windows(2) {
        assert!(pair[0].id > pair[1].id);
    }

    let uids: HashSet<_> = listed.iter().map(|r| r.uid).collect();
    assert_eq!(uids.len(), 20);
}

#[test]
fn test_duplicate_uid_is_rejected() {
    let (_dir, store) = temp_store();
    let uid = Uuid::new_v4();

    store.insert(&uid, &Coordinates::new(1.0, 2.0)).unwrap();
    let err = store.insert(&uid, &Coordinates::new(3.0, 4.0));

    assert!(matches!(err, Err(locapture::errors::AppError::Db(_))));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_open_failure_is_reported_and_retried() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("missing").join("store.sqlite");
    let store = LocationStore::open(&nested);

    assert!(store.list_all().is_err());

    std::fs::create_dir_all(nested.parent().unwrap()).unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_legacy_table_is_upgraded() {
    let (_dir, store) = temp_store();

    {
        let conn = Connection::open(store.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE locations (
                id INTEGER PRIMARY KEY autoincrement,
                latitude varchar(255) NOT NULL,
                longitude varchar(255) NOT NULL);
             INSERT INTO locations (latitude, longitude) VALUES ('10.5', '20.5');
             INSERT INTO locations (latitude, longitude) VALUES ('11.5', '21.5');",
        )
        .unwrap();
    }

    store.ensure_schema().expect("upgrade");

    let listed = store.list_all().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].latitude, "11.5");
    assert_eq!(listed[1].longitude, "20.5");
    assert_ne!(listed[0].uid, listed[1].uid);

    let rec = store
        .insert(&Uuid::new_v4(), &Coordinates::new(12.5, 22.5))
        .unwrap();
    assert!(rec.id > listed[0].id);
    assert_eq!(count_tables(&store), 1);

    // running again is a no-op
    store.ensure_schema().unwrap();
    assert_eq!(store.count().unwrap(), 3);
}
