//! Single-flight capture workflow.
//!
//! Idle → Requesting → Capturing → Persisting → Idle. A trigger that arrives
//! while the state is not Idle is rejected with [`CaptureOutcome::Busy`]. The
//! state returns to Idle through a drop guard, so every exit path clears it.

use crate::db::store::LocationStore;
use crate::errors::{AppError, AppResult};
use crate::geo::LocationProvider;
use crate::models::location::LocationRecord;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Requesting,
    Capturing,
    Persisting,
}

#[derive(Debug)]
pub enum CaptureOutcome {
    /// Stored and appended to the display list.
    Captured(LocationRecord),
    /// The user refused location access. Not an error.
    PermissionDenied,
    /// Another capture was still in flight; nothing was done.
    Busy,
    /// Permission request, position read or insert failed. Already logged.
    Failed(AppError),
}

impl CaptureOutcome {
    pub fn record(&self) -> Option<&LocationRecord> {
        match self {
            CaptureOutcome::Captured(r) => Some(r),
            _ => None,
        }
    }
}

/// Holds the state for one invocation and puts it back to Idle on drop.
struct InFlight<'a> {
    state: &'a Mutex<CaptureState>,
}

impl InFlight<'_> {
    fn advance(&self, next: CaptureState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = CaptureState::Idle;
    }
}

#[derive(Default)]
pub struct CaptureWorkflow {
    state: Mutex<CaptureState>,
}

impl CaptureWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The loading flag shown by the front end.
    pub fn is_loading(&self) -> bool {
        self.state() != CaptureState::Idle
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state != CaptureState::Idle {
            return None;
        }
        *state = CaptureState::Requesting;
        Some(InFlight { state: &self.state })
    }

    /// Run one capture. `display` only grows after the insert succeeded.
    pub fn run<P>(
        &self,
        provider: &P,
        store: &LocationStore,
        display: &Mutex<Vec<LocationRecord>>,
    ) -> CaptureOutcome
    where
        P: LocationProvider + ?Sized,
    {
        let Some(flight) = self.begin() else {
            debug!("capture already in flight, trigger ignored");
            return CaptureOutcome::Busy;
        };

        match Self::execute(&flight, provider, store) {
            Ok(Some(record)) => {
                display
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(record.clone());
                info!(
                    id = record.id,
                    uid = %record.uid,
                    latitude = %record.latitude,
                    longitude = %record.longitude,
                    "location captured"
                );
                CaptureOutcome::Captured(record)
            }
            Ok(None) => {
                info!("location permission denied, nothing captured");
                CaptureOutcome::PermissionDenied
            }
            Err(e) => {
                error!(error = %e, "location capture failed");
                CaptureOutcome::Failed(e)
            }
        }
    }

    fn execute<P>(
        flight: &InFlight<'_>,
        provider: &P,
        store: &LocationStore,
    ) -> AppResult<Option<LocationRecord>>
    where
        P: LocationProvider + ?Sized,
    {
        if !provider.request_permission()?.is_granted() {
            return Ok(None);
        }

        flight.advance(CaptureState::Capturing);
        let coords = provider.current_position()?;

        flight.advance(CaptureState::Persisting);
        store.insert(&Uuid::new_v4(), &coords).map(Some)
    }
}
