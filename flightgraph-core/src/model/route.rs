use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// one origin-to-destination segment of a route record. departure and arrival
/// times are minute-of-day offsets relative to midnight on the flight date,
/// as delivered by the schedule feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegSpec {
    pub origin: String,
    pub destination: String,
    pub sequence_number: u32,
    pub departure_minute: i32,
    pub arrival_minute: i32,
    pub aircraft_type: String,
}

/// one schedule feed record: an airline/flight-number pair operating one or
/// more legs over an inclusive validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub airline: String,
    pub flight_number: u32,
    /// first day of the inclusive validity window
    pub valid_from: NaiveDate,
    /// last day of the inclusive validity window
    pub valid_to: NaiveDate,
    /// legs in feed order
    pub legs: Vec<LegSpec>,
}
