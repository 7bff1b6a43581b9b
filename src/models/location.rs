use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A position as reported by the location provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a pair typed on the command line.
    /// Only checks that both values are finite numbers, no range checks.
    pub fn parse(latitude: &str, longitude: &str) -> AppResult<Self> {
        Ok(Self::new(
            parse_component(latitude)?,
            parse_component(longitude)?,
        ))
    }

    /// Convert latitude → DB string
    pub fn latitude_text(&self) -> String {
        self.latitude.to_string()
    }

    /// Convert longitude → DB string
    pub fn longitude_text(&self) -> String {
        self.longitude.to_string()
    }
}

fn parse_component(s: &str) -> AppResult<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::InvalidCoordinate(s.to_string())),
    }
}

/// A captured point as stored in the `locations` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRecord {
    pub id: i64,
    pub uid: Uuid,
    pub latitude: String,
    pub longitude: String,
}

impl LocationRecord {
    /// Title used by the list view.
    pub fn title(&self) -> String {
        format!("Location {}", self.uid)
    }

    pub fn description(&self) -> String {
        format!(
            "Latitude: {} | Longitude: {}",
            self.latitude, self.longitude
        )
    }
}
