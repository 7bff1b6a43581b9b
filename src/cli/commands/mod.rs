pub mod capture;
pub mod config;
pub mod init;
pub mod list;
pub mod theme;

use crate::config::Config;
use crate::core::session::Session;
use crate::db::store::LocationStore;
use crate::geo::{DeviceProvider, PermissionPolicy, PositionSource};
use crate::prefs::{PreferenceStore, YamlPreferenceFile};

/// Wire the configured store and preference file around `provider`.
pub fn open_session(
    cfg: &Config,
    provider: DeviceProvider,
) -> Session<DeviceProvider, YamlPreferenceFile> {
    let store = LocationStore::open(cfg.database_path());
    Session::start(store, open_preferences(cfg), provider)
}

/// Preferences alone, without touching the database.
pub fn open_preferences(cfg: &Config) -> PreferenceStore<YamlPreferenceFile> {
    PreferenceStore::new(YamlPreferenceFile::new(cfg.preferences_path()))
}

/// Provider for commands that never capture.
pub fn passive_provider() -> DeviceProvider {
    DeviceProvider::new(PermissionPolicy::Deny, PositionSource::Unavailable)
}
