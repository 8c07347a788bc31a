//! leg flattening: the first pipeline stage after fetch. each route record's
//! legs become independent rows carrying the route's airline, flight number,
//! and validity window, ready for grouping and multi-day expansion.
use chrono::NaiveDate;

use flightgraph_core::model::RouteRecord;

/// one leg of one route, flattened with its route-level fields. still spans
/// the route's whole validity window; dated instances come out of expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatLeg {
    pub airline: String,
    pub flight_number: u32,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub sequence_number: u32,
    pub departure_minute: i32,
    pub arrival_minute: i32,
    pub aircraft_type: String,
}

impl FlatLeg {
    /// expansion group key: legs of the same flight and sequence number are
    /// forward-filled together.
    pub fn group_key(&self) -> (String, u32, u32) {
        (self.airline.clone(), self.flight_number, self.sequence_number)
    }
}

/// flattens a fetched batch, preserving feed order across and within routes.
pub fn flatten_routes(routes: Vec<RouteRecord>) -> Vec<FlatLeg> {
    routes.into_iter().flat_map(flatten_route).collect()
}

/// one flat row per leg; a route with zero legs yields nothing.
pub fn flatten_route(route: RouteRecord) -> Vec<FlatLeg> {
    route
        .legs
        .into_iter()
        .map(|leg| FlatLeg {
            airline: route.airline.clone(),
            flight_number: route.flight_number,
            valid_from: route.valid_from,
            valid_to: route.valid_to,
            origin: leg.origin,
            destination: leg.destination,
            sequence_number: leg.sequence_number,
            departure_minute: leg.departure_minute,
            arrival_minute: leg.arrival_minute,
            aircraft_type: leg.aircraft_type,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use flightgraph_core::model::LegSpec;

    fn leg(seq: u32, origin: &str, destination: &str) -> LegSpec {
        LegSpec {
            origin: origin.to_string(),
            destination: destination.to_string(),
            sequence_number: seq,
            departure_minute: 600,
            arrival_minute: 720,
            aircraft_type: String::from("32N"),
        }
    }

    fn route(legs: Vec<LegSpec>) -> RouteRecord {
        RouteRecord {
            airline: String::from("LH"),
            flight_number: 400,
            valid_from: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            valid_to: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            legs,
        }
    }

    #[test]
    fn test_route_fields_attached_to_every_leg() {
        let flat = flatten_route(route(vec![leg(1, "FRA", "JFK"), leg(2, "JFK", "BOS")]));
        assert_eq!(flat.len(), 2);
        for row in &flat {
            assert_eq!(row.airline, "LH");
            assert_eq!(row.flight_number, 400);
            assert_eq!(row.valid_from, NaiveDate::from_ymd_opt(2026, 8, 28).unwrap());
            assert_eq!(row.valid_to, NaiveDate::from_ymd_opt(2026, 8, 30).unwrap());
        }
        assert_eq!(flat[0].origin, "FRA");
        assert_eq!(flat[1].origin, "JFK");
    }

    #[test]
    fn test_route_without_legs_yields_nothing() {
        assert!(flatten_route(route(vec![])).is_empty());
    }

    #[test]
    fn test_batch_preserves_feed_order() {
        let batch = vec![
            route(vec![leg(1, "FRA", "JFK")]),
            route(vec![leg(1, "MUC", "LHR")]),
        ];
        let flat = flatten_routes(batch);
        assert_eq!(flat[0].origin, "FRA");
        assert_eq!(flat[1].origin, "MUC");
    }
}
