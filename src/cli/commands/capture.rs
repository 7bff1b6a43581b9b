use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::capture::CaptureOutcome;
use crate::errors::AppResult;
use crate::geo::{DeviceProvider, PermissionPolicy, PositionSource};
use crate::models::location::Coordinates;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Capture { lat, lon, yes } = cmd {
        let source = match (lat, lon) {
            (Some(lat), Some(lon)) => PositionSource::Fixed(Coordinates::parse(lat, lon)?),
            _ => match cfg.position_file_path() {
                Some(path) => PositionSource::File(path),
                None => PositionSource::Unavailable,
            },
        };

        let policy = if *yes {
            PermissionPolicy::Grant
        } else {
            cfg.permission
        };

        let session = open_session(cfg, DeviceProvider::new(policy, source));

        match session.capture() {
            CaptureOutcome::Captured(record) => {
                success(format!("{} stored", record.title()));
                println!("{}", record.description());
                info(format!("{} locations stored", session.locations().len()));
            }
            CaptureOutcome::PermissionDenied => {
                info("Location permission denied, nothing captured.");
            }
            CaptureOutcome::Busy => {
                warning("A capture is already in progress.");
            }
            CaptureOutcome::Failed(e) => return Err(e),
        }
    }

    Ok(())
}
