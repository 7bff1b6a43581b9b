use crate::errors::{AppError, AppResult};
use crate::prefs::PreferenceBackend;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Preferences kept as a flat YAML mapping in a single file.
///
/// Every `get` re-reads the file so a fresh process sees what a previous one
/// wrote. Writes are read-modify-write under a process-local lock.
pub struct YamlPreferenceFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl YamlPreferenceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> AppResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Preference(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl PreferenceBackend for YamlPreferenceFile {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Unreadable content is overwritten.
        let mut all = self.read_all().unwrap_or_else(|e| {
            warn!(error = %e, "discarding unreadable preferences file");
            BTreeMap::new()
        });
        all.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_yaml::to_string(&all)?)?;
        Ok(())
    }
}
