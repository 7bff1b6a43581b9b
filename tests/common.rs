#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn loc() -> Command {
    cargo_bin_cmd!("locapture")
}

/// Isolated HOME with its own database and preferences file.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn db_path(&self) -> String {
        self.dir
            .path()
            .join("locations.sqlite")
            .to_string_lossy()
            .to_string()
    }

    pub fn prefs_path(&self) -> String {
        self.dir
            .path()
            .join("preferences.yaml")
            .to_string_lossy()
            .to_string()
    }

    /// Command bound to this environment (HOME, --db, --prefs).
    pub fn cmd(&self) -> Command {
        let mut cmd = loc();
        cmd.env("HOME", self.dir.path())
            .args(["--db", &self.db_path(), "--prefs", &self.prefs_path()]);
        cmd
    }

    /// Write `~/.locapture/locapture.conf` inside the fake HOME.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let conf_dir = self.dir.path().join(".locapture");
        fs::create_dir_all(&conf_dir).expect("create config dir");
        let path = conf_dir.join("locapture.conf");
        fs::write(&path, yaml).expect("write config");
        path
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }
}

/// Capture a fixed position with permission granted.
pub fn capture_at(env: &TestEnv, lat: &str, lon: &str) {
    env.cmd()
        .args([
            "capture",
            "--yes",
            &format!("--lat={lat}"),
            &format!("--lon={lon}"),
        ])
        .assert()
        .success();
}
