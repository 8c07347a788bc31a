//! live-position interpolation. turns a flight's status and its
//! scheduled/actual/estimated timestamps into a single displayed coordinate.
use chrono::{DateTime, Utc};
use geo::Coord;

use crate::model::{FlightStatus, FlightStatusCode};

/// selects which departure/arrival timestamps to trust for interpolation:
/// a landed flight uses actual times for both ends, an airborne flight uses
/// its actual departure and estimated arrival. any other status, or a
/// missing required timestamp, yields `None` ("status unknown").
pub fn resolve_track_times(status: &FlightStatus) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    match status.code {
        FlightStatusCode::Landed => {
            Some((status.actual_departure_utc?, status.actual_arrival_utc?))
        }
        FlightStatusCode::Departed => {
            Some((status.actual_departure_utc?, status.estimated_arrival_utc?))
        }
        _ => None,
    }
}

/// positions a flight on the straight line between its endpoints at time
/// `now`. before departure the flight sits at the origin, at or after arrival
/// at the destination; in between, latitude and longitude are interpolated
/// independently (planar, not great-circle: a display approximation, not a
/// navigational path). `arrival <= departure` falls into the already-arrived
/// branch, so degenerate zero-duration data cannot divide by zero.
pub fn interpolate(
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    origin: Coord<f64>,
    destination: Coord<f64>,
    now: DateTime<Utc>,
) -> Coord<f64> {
    if now < departure {
        return origin;
    }
    if now >= arrival {
        return destination;
    }
    // reached only when departure <= now < arrival, so the duration is positive
    let total = (arrival - departure).num_seconds() as f64;
    let elapsed = (now - departure).num_seconds() as f64;
    let fraction = (elapsed / total).clamp(0.0, 1.0);
    Coord {
        x: origin.x + (destination.x - origin.x) * fraction,
        y: origin.y + (destination.y - origin.y) * fraction,
    }
}

/// the displayed coordinate for a flight at time `now`, or `None` when the
/// status gives us nothing trustworthy to interpolate with.
pub fn display_position(
    status: &FlightStatus,
    origin: Coord<f64>,
    destination: Coord<f64>,
    now: DateTime<Utc>,
) -> Option<Coord<f64>> {
    let (departure, arrival) = resolve_track_times(status)?;
    Some(interpolate(departure, arrival, origin, destination, now))
}
