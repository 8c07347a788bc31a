use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// flight status categories reported by the live operations feed. anything the
/// position interpolator cannot reason about collapses into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatusCode {
    /// airborne, not yet landed
    Departed,
    Landed,
    Diverted,
    Cancelled,
    Unknown,
}

impl FlightStatusCode {
    /// maps the feed's two-letter status codes. codes with no interpolation
    /// semantics (on time, delayed, no info, ...) map to `Unknown`.
    pub fn from_code(code: &str) -> FlightStatusCode {
        match code {
            "DP" => FlightStatusCode::Departed,
            "LD" => FlightStatusCode::Landed,
            "DV" => FlightStatusCode::Diverted,
            "CD" => FlightStatusCode::Cancelled,
            _ => FlightStatusCode::Unknown,
        }
    }
}

/// the live status of one flight as consumed by the position interpolator:
/// a status category plus the scheduled/actual/estimated UTC times for
/// departure and arrival. every timestamp is optional; the interpolator
/// degrades to "status unknown" when a required one is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStatus {
    pub code: FlightStatusCode,
    /// human-readable status definition from the feed, for display
    pub status_text: Option<String>,
    pub origin: String,
    pub destination: String,
    pub scheduled_departure_utc: Option<DateTime<Utc>>,
    pub actual_departure_utc: Option<DateTime<Utc>>,
    pub estimated_departure_utc: Option<DateTime<Utc>>,
    pub scheduled_arrival_utc: Option<DateTime<Utc>>,
    pub actual_arrival_utc: Option<DateTime<Utc>>,
    pub estimated_arrival_utc: Option<DateTime<Utc>>,
}
