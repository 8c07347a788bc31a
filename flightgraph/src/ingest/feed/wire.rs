//! wire-format types for the schedule and live-status feeds, with conversions
//! into the domain model. field names mirror the feed's nominal JSON keys;
//! per-leg required fields are `Option` here so that one incomplete leg is
//! dropped (with a warning) instead of failing the whole response decode.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::Error, Deserialize, Deserializer};

use flightgraph_core::model::{FlightStatus, FlightStatusCode, LegSpec, RouteRecord};

/// date format used by the schedule feed for validity windows, e.g. `24APR23`.
pub const FEED_DATE_FORMAT: &str = "%d%b%y";

/// timestamp format used by the live-status feed, e.g. `2023-04-24T10:50Z`.
pub const STATUS_TIME_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    pub airline: String,
    #[serde(rename = "flightNumber")]
    pub flight_number: u32,
    #[serde(rename = "periodOfOperationUTC")]
    pub period_of_operation_utc: PeriodOfOperation,
    #[serde(default)]
    pub legs: Vec<LegResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodOfOperation {
    #[serde(rename = "startDate", deserialize_with = "deserialize_feed_date")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate", deserialize_with = "deserialize_feed_date")]
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct LegResponse {
    #[serde(rename = "sequenceNumber")]
    pub sequence_number: Option<u32>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(rename = "aircraftDepartureTimeUTC")]
    pub aircraft_departure_time_utc: Option<i32>,
    #[serde(rename = "aircraftArrivalTimeUTC")]
    pub aircraft_arrival_time_utc: Option<i32>,
    #[serde(rename = "aircraftType")]
    pub aircraft_type: Option<String>,
}

impl LegResponse {
    /// `None` when any required field is absent.
    pub fn into_leg(self) -> Option<LegSpec> {
        Some(LegSpec {
            origin: self.origin?,
            destination: self.destination?,
            sequence_number: self.sequence_number?,
            departure_minute: self.aircraft_departure_time_utc?,
            arrival_minute: self.aircraft_arrival_time_utc?,
            aircraft_type: self.aircraft_type?,
        })
    }
}

impl RouteResponse {
    /// converts a wire route into the domain record, dropping incomplete legs.
    pub fn into_route(self) -> RouteRecord {
        let airline = self.airline;
        let flight_number = self.flight_number;
        let mut legs = Vec::with_capacity(self.legs.len());
        for (idx, leg) in self.legs.into_iter().enumerate() {
            match leg.into_leg() {
                Some(leg) => legs.push(leg),
                None => log::warn!(
                    "dropping incomplete leg {idx} of {airline}{flight_number}, missing required fields"
                ),
            }
        }
        RouteRecord {
            airline,
            flight_number,
            valid_from: self.period_of_operation_utc.start_date,
            valid_to: self.period_of_operation_utc.end_date,
            legs,
        }
    }
}

pub fn deserialize_feed_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: String = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&date_str, FEED_DATE_FORMAT)
        .map_err(|e| D::Error::custom(format!("Invalid feed date format: {e}")))
}

// live-status document, nested the way the operations feed delivers it

#[derive(Debug, Deserialize)]
pub struct FlightStatusDocument {
    #[serde(rename = "FlightStatusResource")]
    pub resource: FlightStatusResource,
}

#[derive(Debug, Deserialize)]
pub struct FlightStatusResource {
    #[serde(rename = "Flights")]
    pub flights: FlightsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct FlightsEnvelope {
    #[serde(rename = "Flight", default)]
    pub flight: Vec<FlightResponse>,
}

#[derive(Debug, Deserialize)]
pub struct FlightResponse {
    #[serde(rename = "Departure")]
    pub departure: SegmentTimes,
    #[serde(rename = "Arrival")]
    pub arrival: SegmentTimes,
    #[serde(rename = "FlightStatus")]
    pub flight_status: CodedValue,
}

#[derive(Debug, Deserialize)]
pub struct CodedValue {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Definition")]
    pub definition: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SegmentTimes {
    #[serde(rename = "AirportCode")]
    pub airport_code: String,
    #[serde(rename = "ScheduledTimeUTC")]
    pub scheduled_time_utc: Option<TimeValue>,
    #[serde(rename = "ActualTimeUTC")]
    pub actual_time_utc: Option<TimeValue>,
    #[serde(rename = "EstimatedTimeUTC")]
    pub estimated_time_utc: Option<TimeValue>,
}

#[derive(Debug, Deserialize)]
pub struct TimeValue {
    #[serde(rename = "DateTime")]
    pub date_time: String,
}

impl FlightStatusDocument {
    /// the first flight in the document as a domain status, or `None` when
    /// the document carries no flights. unparseable or absent timestamps
    /// become `None` fields, which the interpolator treats as status-unknown.
    pub fn into_status(self) -> Option<FlightStatus> {
        let flight = self.resource.flights.flight.into_iter().next()?;
        Some(FlightStatus {
            code: FlightStatusCode::from_code(&flight.flight_status.code),
            status_text: flight.flight_status.definition,
            origin: flight.departure.airport_code,
            destination: flight.arrival.airport_code,
            scheduled_departure_utc: parse_status_time(flight.departure.scheduled_time_utc),
            actual_departure_utc: parse_status_time(flight.departure.actual_time_utc),
            estimated_departure_utc: parse_status_time(flight.departure.estimated_time_utc),
            scheduled_arrival_utc: parse_status_time(flight.arrival.scheduled_time_utc),
            actual_arrival_utc: parse_status_time(flight.arrival.actual_time_utc),
            estimated_arrival_utc: parse_status_time(flight.arrival.estimated_time_utc),
        })
    }
}

fn parse_status_time(value: Option<TimeValue>) -> Option<DateTime<Utc>> {
    let value = value?;
    match NaiveDateTime::parse_from_str(&value.date_time, STATUS_TIME_FORMAT) {
        Ok(t) => Some(t.and_utc()),
        Err(e) => {
            log::warn!("unparseable status timestamp '{}': {e}", value.date_time);
            None
        }
    }
}
