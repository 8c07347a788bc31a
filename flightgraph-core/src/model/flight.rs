use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::time_ops::schedule_time_format;
use crate::model::AirportNode;

/// a single dated flight produced by the schedule-ingestion pipeline. exactly
/// one instance exists per (airline, flight number, sequence number, flight
/// date) after multi-day expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInstance {
    pub airline: String,
    pub flight_number: u32,
    pub sequence_number: u32,
    pub origin: String,
    pub destination: String,
    pub aircraft_type: String,
    /// the single calendar day this instance operates on
    pub flight_date: NaiveDate,
    #[serde(with = "schedule_time_format")]
    pub departure: NaiveDateTime,
    #[serde(with = "schedule_time_format")]
    pub arrival: NaiveDateTime,
}

/// a directed origin-to-destination edge in the flight graph, carrying a
/// [`FlightInstance`]'s attributes plus origin/destination display fields
/// denormalized at merge time (frozen, never re-synced against the nodes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEdge {
    pub airline: String,
    pub flight_number: u32,
    pub sequence_number: u32,
    pub origin: String,
    pub destination: String,
    pub aircraft_type: String,
    pub flight_date: NaiveDate,
    #[serde(with = "schedule_time_format")]
    pub departure_time: NaiveDateTime,
    #[serde(with = "schedule_time_format")]
    pub arrival_time: NaiveDateTime,
    pub origin_name: Option<String>,
    pub origin_country: Option<String>,
    pub destination_name: Option<String>,
    pub destination_country: Option<String>,
}

impl FlightEdge {
    /// builds an edge from a flight instance, copying the currently-resolved
    /// display fields off the origin and destination nodes.
    pub fn from_instance(
        instance: &FlightInstance,
        origin: Option<&AirportNode>,
        destination: Option<&AirportNode>,
    ) -> FlightEdge {
        FlightEdge {
            airline: instance.airline.clone(),
            flight_number: instance.flight_number,
            sequence_number: instance.sequence_number,
            origin: instance.origin.clone(),
            destination: instance.destination.clone(),
            aircraft_type: instance.aircraft_type.clone(),
            flight_date: instance.flight_date,
            departure_time: instance.departure,
            arrival_time: instance.arrival,
            origin_name: origin.and_then(|a| a.name.clone()),
            origin_country: origin.and_then(|a| a.country.clone()),
            destination_name: destination.and_then(|a| a.name.clone()),
            destination_country: destination.and_then(|a| a.country.clone()),
        }
    }

    /// composite upsert key: (origin, destination, flight number, airline,
    /// departure timestamp).
    pub fn key(&self) -> String {
        format!(
            "{}:{}:{}{}:{}",
            self.origin,
            self.destination,
            self.airline,
            self.flight_number,
            self.departure_time.format(crate::model::time_ops::SCHEDULE_TIME_FORMAT)
        )
    }
}
