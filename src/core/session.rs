//! Composition root for one run of the application: owns the store, the
//! preferences, the location provider and the display state built from them.

use crate::core::capture::{CaptureOutcome, CaptureWorkflow};
use crate::db::store::LocationStore;
use crate::geo::LocationProvider;
use crate::models::location::LocationRecord;
use crate::prefs::{PreferenceBackend, PreferenceStore};
use crate::ui::theme::Palette;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{error, info};

pub struct Session<P, B> {
    store: LocationStore,
    prefs: PreferenceStore<B>,
    provider: P,
    workflow: CaptureWorkflow,
    locations: Mutex<Vec<LocationRecord>>,
    dark_mode: AtomicBool,
}

impl<P, B> Session<P, B>
where
    P: LocationProvider,
    B: PreferenceBackend,
{
    /// Load the dark-mode flag and every stored record. Neither failure is
    /// fatal: the flag defaults to light, the list to empty.
    pub fn start(store: LocationStore, prefs: PreferenceStore<B>, provider: P) -> Self {
        let dark_mode = prefs.load();

        let locations = store.list_all().unwrap_or_else(|e| {
            error!(error = %e, "failed to load stored locations");
            Vec::new()
        });

        info!(
            dark_mode,
            locations = locations.len(),
            "session started"
        );

        Self {
            store,
            prefs,
            provider,
            workflow: CaptureWorkflow::new(),
            locations: Mutex::new(locations),
            dark_mode: AtomicBool::new(dark_mode),
        }
    }

    pub fn capture(&self) -> CaptureOutcome {
        self.workflow
            .run(&self.provider, &self.store, &self.locations)
    }

    /// Snapshot of the display list.
    pub fn locations(&self) -> Vec<LocationRecord> {
        self.locations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.workflow.is_loading()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.load(Ordering::SeqCst)
    }

    /// Flip the flag, persist it best-effort and return the new value.
    pub fn toggle_dark_mode(&self) -> bool {
        let new_value = !self.dark_mode.fetch_xor(true, Ordering::SeqCst);
        self.prefs.save(new_value);
        new_value
    }

    pub fn set_dark_mode(&self, dark_mode: bool) {
        self.dark_mode.store(dark_mode, Ordering::SeqCst);
        self.prefs.save(dark_mode);
    }

    pub fn palette(&self) -> Palette {
        Palette::for_dark_mode(self.dark_mode())
    }

    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
