use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{TestEnv, capture_at};

#[test]
fn test_init_creates_empty_store() {
    let env = TestEnv::new();

    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("0 stored locations"));

    assert!(std::path::Path::new(&env.db_path()).exists());

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No locations captured yet."));
}

#[test]
fn test_capture_end_to_end() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["capture", "--yes", "--lat=37.4", "--lon=-122.1"])
        .assert()
        .success()
        .stdout(contains("Latitude: 37.4 | Longitude: -122.1"))
        .stdout(contains("1 locations stored"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("37.4"))
        .stdout(contains("-122.1"));
}

#[test]
fn test_capture_accepts_space_separated_negative_values() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["capture", "--yes", "--lat", "-33.86", "--lon", "151.21"])
        .assert()
        .success()
        .stdout(contains("Latitude: -33.86 | Longitude: 151.21"));
}

#[test]
fn test_list_json_newest_first() {
    let env = TestEnv::new();
    env.init();

    capture_at(&env, "45.1", "9.2");
    capture_at(&env, "46.5", "11.3");

    let output = env
        .cmd()
        .args(["list", "--json"])
        .output()
        .expect("run list --json");
    assert!(output.status.success());

    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json output");
    let rows = rows.as_array().expect("json array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["latitude"], "46.5");
    assert_eq!(rows[0]["longitude"], "11.3");
    assert_eq!(rows[1]["latitude"], "45.1");
    assert!(rows[0]["id"].as_i64() > rows[1]["id"].as_i64());
    assert_ne!(rows[0]["uid"], rows[1]["uid"]);
}

#[test]
fn test_capture_prompt_declined_stores_nothing() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["capture", "--lat=37.4", "--lon=-122.1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("permission denied"));

    env.cmd()
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(contains("[]"));
}

#[test]
fn test_capture_prompt_accepted() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["capture", "--lat=1.5", "--lon=2.5"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("Latitude: 1.5 | Longitude: 2.5"));
}

#[test]
fn test_capture_denied_by_config() {
    let env = TestEnv::new();
    env.write_config("permission: deny\n");
    env.init();

    env.cmd()
        .args(["capture", "--lat=10", "--lon=20"])
        .assert()
        .success()
        .stdout(contains("permission denied"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No locations captured yet."));
}

#[test]
fn test_capture_reads_position_file() {
    let env = TestEnv::new();
    let position = env.dir.path().join("position.json");
    fs::write(&position, r#"{"latitude": 48.8566, "longitude": 2.3522}"#).unwrap();
    env.write_config(&format!(
        "permission: grant\nposition_file: {}\n",
        position.display()
    ));
    env.init();

    env.cmd()
        .arg("capture")
        .assert()
        .success()
        .stdout(contains("Latitude: 48.8566 | Longitude: 2.3522"));
}

#[test]
fn test_capture_without_position_source_fails() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["capture", "--yes"])
        .assert()
        .failure()
        .stderr(contains("no position source available"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No locations captured yet."));
}

#[test]
fn test_capture_rejects_invalid_coordinate() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["capture", "--yes", "--lat=north", "--lon=1"])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinate: north"));
}

#[test]
fn test_theme_defaults_to_light() {
    let env = TestEnv::new();

    env.cmd()
        .arg("theme")
        .assert()
        .success()
        .stdout(contains("Theme: light"));

    assert!(!std::path::Path::new(&env.prefs_path()).exists());
}

#[test]
fn test_theme_toggle_persists_across_runs() {
    let env = TestEnv::new();

    env.cmd()
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(contains("Theme: dark"));

    env.cmd()
        .arg("theme")
        .assert()
        .success()
        .stdout(contains("Theme: dark"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Theme: dark"));

    let prefs = fs::read_to_string(env.prefs_path()).unwrap();
    assert!(prefs.contains("dark_mode"));
    assert!(prefs.contains("true"));

    env.cmd()
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(contains("Theme: light"));
}

#[test]
fn test_theme_explicit_modes_conflict() {
    let env = TestEnv::new();

    env.cmd()
        .args(["theme", "--dark"])
        .assert()
        .success()
        .stdout(contains("Theme: dark"));

    env.cmd()
        .args(["theme", "--light"])
        .assert()
        .success()
        .stdout(contains("Theme: light"));

    env.cmd()
        .args(["theme", "--dark", "--light"])
        .assert()
        .failure();
}

#[test]
fn test_config_print_shows_overrides() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:"))
        .stdout(contains(env.db_path()))
        .stdout(contains("permission: prompt"))
        .stdout(contains("log_level: warn").and(contains("position_file")));
}

#[test]
fn test_init_test_mode_leaves_config_file_alone() {
    let env = TestEnv::new();
    env.init();

    let conf = env.dir.path().join(".locapture").join("locapture.conf");
    assert!(!conf.exists());
}

#[test]
fn test_theme_does_not_open_database() {
    let env = TestEnv::new();
    let missing_db = env
        .dir
        .path()
        .join("no-such-dir")
        .join("locations.sqlite");

    common::loc()
        .env("HOME", env.dir.path())
        .args([
            "--db",
            &missing_db.to_string_lossy(),
            "--prefs",
            &env.prefs_path(),
        ])
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(contains("Theme: dark"))
        .stderr(contains("failed to load stored locations").not());

    assert!(!missing_db.exists());
    assert!(fs::read_to_string(env.prefs_path()).unwrap().contains("dark_mode"));
}
