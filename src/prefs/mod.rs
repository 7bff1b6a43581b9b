//! Dark-mode preference on top of a string key-value backend.
//!
//! Both operations are best-effort: `load` falls back to light mode and
//! `save` only logs, so callers always get a usable value.

mod file;
mod memory;

pub use file::YamlPreferenceFile;
pub use memory::InMemoryPreferences;

use crate::errors::AppResult;
use tracing::{error, warn};

/// Key under which the dark-mode flag is stored.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Minimal key-value contract consumed by [`PreferenceStore`].
pub trait PreferenceBackend: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

impl<B: PreferenceBackend + ?Sized> PreferenceBackend for Box<B> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

pub struct PreferenceStore<B> {
    backend: B,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Persisted flag; `false` when never written or unreadable.
    pub fn load(&self) -> bool {
        match self.backend.get(DARK_MODE_KEY) {
            Ok(Some(v)) => v == "true",
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "failed to load dark mode preference, using light mode");
                false
            }
        }
    }

    /// Best-effort write of the flag as `"true"` / `"false"`.
    pub fn save(&self, dark_mode: bool) {
        if let Err(e) = self.backend.set(DARK_MODE_KEY, &dark_mode.to_string()) {
            error!(error = %e, "failed to save dark mode preference");
        }
    }
}
