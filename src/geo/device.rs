use crate::errors::{AppError, AppResult};
use crate::geo::{LocationProvider, PermissionStatus};
use crate::models::location::Coordinates;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// How the terminal front end answers the permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionPolicy {
    /// Ask on stdin every time.
    #[default]
    Prompt,
    Grant,
    Deny,
}

/// Where the position comes from.
#[derive(Debug, Clone)]
pub enum PositionSource {
    /// Coordinates given up front (e.g. on the command line).
    Fixed(Coordinates),
    /// JSON document `{"latitude": .., "longitude": ..}` kept current by a
    /// positioning daemon.
    File(PathBuf),
    /// No source configured: every read fails.
    Unavailable,
}

pub struct DeviceProvider {
    policy: PermissionPolicy,
    source: PositionSource,
}

impl DeviceProvider {
    pub fn new(policy: PermissionPolicy, source: PositionSource) -> Self {
        Self { policy, source }
    }
}

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> AppResult<bool> {
    warning(prompt);
    print!("Allow [y/N]: ");
    io::stdout()
        .flush()
        .map_err(|e| AppError::Permission(e.to_string()))?;

    let mut s = String::new();
    io::stdin()
        .read_line(&mut s)
        .map_err(|e| AppError::Permission(e.to_string()))?;
    Ok(matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
}

impl LocationProvider for DeviceProvider {
    fn request_permission(&self) -> AppResult<PermissionStatus> {
        let granted = match self.policy {
            PermissionPolicy::Grant => true,
            PermissionPolicy::Deny => false,
            PermissionPolicy::Prompt => {
                ask_confirmation("locapture wants to read your current location.")?
            }
        };

        Ok(if granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        })
    }

    fn current_position(&self) -> AppResult<Coordinates> {
        match &self.source {
            PositionSource::Fixed(c) => Ok(*c),
            PositionSource::File(path) => {
                debug!(path = %path.display(), "reading position file");
                let content = fs::read_to_string(path).map_err(|e| {
                    AppError::Capture(format!("{}: {}", path.display(), e))
                })?;
                serde_json::from_str::<Coordinates>(&content)
                    .map_err(|e| AppError::Capture(format!("{}: {}", path.display(), e)))
            }
            PositionSource::Unavailable => Err(AppError::Capture(
                "no position source available (pass --lat/--lon or set position_file)".into(),
            )),
        }
    }
}
