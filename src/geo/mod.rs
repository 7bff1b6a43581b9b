//! Location provider seam: permission gate plus single-shot position read.

pub mod device;

pub use device::{DeviceProvider, PermissionPolicy, PositionSource};

use crate::errors::AppResult;
use crate::models::location::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

pub trait LocationProvider: Send + Sync {
    /// Ask for foreground location access. A refusal is `Ok(Denied)`,
    /// errors are reserved for the provider failing to ask.
    fn request_permission(&self) -> AppResult<PermissionStatus>;

    /// Read the current position once.
    fn current_position(&self) -> AppResult<Coordinates>;
}
