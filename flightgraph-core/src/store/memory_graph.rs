use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{AirportNode, FlightEdge};
use crate::store::{GraphStore, StoreError};

/// in-process [`GraphStore`] backed by hash maps, with JSON file persistence
/// so consecutive CLI runs see the same graph. airports are keyed by IATA
/// code, flight edges by their composite key string.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryGraph {
    airports: HashMap<String, AirportNode>,
    flights: HashMap<String, FlightEdge>,
}

impl MemoryGraph {
    pub fn new() -> MemoryGraph {
        MemoryGraph::default()
    }

    /// loads a graph file, or starts an empty graph if the file does not
    /// exist yet (the first ingestion run creates it).
    pub fn load(path: &Path) -> Result<MemoryGraph, StoreError> {
        if !path.exists() {
            log::debug!("graph file {path:?} not found, starting with an empty graph");
            return Ok(MemoryGraph::new());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| StoreError::GraphFileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let graph = serde_json::from_str(&contents)?;
        Ok(graph)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|e| StoreError::GraphFileWrite {
            path: path.display().to_string(),
            source: e,
        })
    }
}

impl GraphStore for MemoryGraph {
    fn upsert_airport(&mut self, airport: AirportNode) -> Result<(), StoreError> {
        self.airports.insert(airport.iata.clone(), airport);
        Ok(())
    }

    fn ensure_airport(&mut self, iata: &str) -> Result<(), StoreError> {
        self.airports
            .entry(iata.to_string())
            .or_insert_with(|| AirportNode::bare(iata));
        Ok(())
    }

    fn airport(&self, iata: &str) -> Result<Option<AirportNode>, StoreError> {
        Ok(self.airports.get(iata).cloned())
    }

    fn list_airports(&self) -> Result<Vec<AirportNode>, StoreError> {
        Ok(self
            .airports
            .values()
            .sorted_by(|a, b| a.iata.cmp(&b.iata))
            .cloned()
            .collect())
    }

    fn delete_all_flights(&mut self) -> Result<usize, StoreError> {
        let removed = self.flights.len();
        self.flights.clear();
        Ok(removed)
    }

    fn upsert_flight(&mut self, edge: FlightEdge) -> Result<(), StoreError> {
        self.flights.insert(edge.key(), edge);
        Ok(())
    }

    fn flight_count(&self) -> Result<usize, StoreError> {
        Ok(self.flights.len())
    }

    fn departures(
        &self,
        iata: &str,
        after: NaiveDateTime,
        limit: usize,
    ) -> Result<Vec<FlightEdge>, StoreError> {
        Ok(self
            .flights
            .values()
            .filter(|e| e.origin == iata && e.departure_time > after)
            .sorted_by_key(|e| e.departure_time)
            .take(limit)
            .cloned()
            .collect())
    }

    fn arrivals(
        &self,
        iata: &str,
        after: NaiveDateTime,
        limit: usize,
    ) -> Result<Vec<FlightEdge>, StoreError> {
        Ok(self
            .flights
            .values()
            .filter(|e| e.destination == iata && e.arrival_time > after)
            .sorted_by_key(|e| e.arrival_time)
            .take(limit)
            .cloned()
            .collect())
    }

    fn flights_between(
        &self,
        origin: &str,
        destination: &str,
        after: NaiveDateTime,
        limit: usize,
    ) -> Result<Vec<FlightEdge>, StoreError> {
        Ok(self
            .flights
            .values()
            .filter(|e| e.origin == origin && e.destination == destination)
            .filter(|e| e.departure_time > after)
            .sorted_by_key(|e| e.departure_time)
            .take(limit)
            .cloned()
            .collect())
    }

    fn flights_on(&self, date: NaiveDate) -> Result<Vec<FlightEdge>, StoreError> {
        Ok(self
            .flights
            .values()
            .filter(|e| e.flight_date == date)
            .sorted_by_key(|e| e.departure_time)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::FlightInstance;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn instance(origin: &str, destination: &str, flight_number: u32, d: u32, minute: i32) -> FlightInstance {
        FlightInstance {
            airline: String::from("LH"),
            flight_number,
            sequence_number: 1,
            origin: origin.to_string(),
            destination: destination.to_string(),
            aircraft_type: String::from("32N"),
            flight_date: date(d),
            departure: crate::model::time_ops::timestamp(date(d), minute).unwrap(),
            arrival: crate::model::time_ops::timestamp(date(d), minute + 90).unwrap(),
        }
    }

    fn edge(origin: &str, destination: &str, flight_number: u32, d: u32, minute: i32) -> FlightEdge {
        FlightEdge::from_instance(&instance(origin, destination, flight_number, d, minute), None, None)
    }

    #[test]
    fn test_ensure_airport_does_not_downgrade() {
        let mut graph = MemoryGraph::new();
        let mut enriched = AirportNode::bare("FRA");
        enriched.name = Some(String::from("Frankfurt am Main"));
        enriched.country = Some(String::from("Germany"));
        graph.upsert_airport(enriched.clone()).unwrap();

        graph.ensure_airport("FRA").unwrap();
        assert_eq!(graph.airport("FRA").unwrap(), Some(enriched));
    }

    #[test]
    fn test_ensure_airport_creates_bare_node() {
        let mut graph = MemoryGraph::new();
        graph.ensure_airport("JFK").unwrap();
        assert_eq!(graph.airport("JFK").unwrap(), Some(AirportNode::bare("JFK")));
    }

    #[test]
    fn test_unknown_iata_yields_empty_results() {
        let mut graph = MemoryGraph::new();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 600)).unwrap();
        let after = date(28).and_hms_opt(0, 0, 0).unwrap();
        assert!(graph.departures("XXX", after, 5).unwrap().is_empty());
        assert!(graph.arrivals("not-a-code", after, 5).unwrap().is_empty());
    }

    #[test]
    fn test_departures_sorted_and_limited() {
        let mut graph = MemoryGraph::new();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 720)).unwrap();
        graph.upsert_flight(edge("FRA", "LHR", 900, 28, 480)).unwrap();
        graph.upsert_flight(edge("FRA", "CDG", 1026, 28, 600)).unwrap();
        graph.upsert_flight(edge("MUC", "JFK", 410, 28, 500)).unwrap();

        let after = date(28).and_hms_opt(0, 0, 0).unwrap();
        let all = graph.departures("FRA", after, 5).unwrap();
        assert_eq!(
            all.iter().map(|e| e.flight_number).collect::<Vec<_>>(),
            vec![900, 1026, 400]
        );

        let limited = graph.departures("FRA", after, 2).unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_departures_respect_time_bound() {
        let mut graph = MemoryGraph::new();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 600)).unwrap();
        let after = date(28).and_hms_opt(11, 0, 0).unwrap();
        assert!(graph.departures("FRA", after, 5).unwrap().is_empty());
    }

    #[test]
    fn test_flights_between() {
        let mut graph = MemoryGraph::new();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 600)).unwrap();
        graph.upsert_flight(edge("FRA", "JFK", 404, 28, 900)).unwrap();
        graph.upsert_flight(edge("FRA", "LHR", 900, 28, 480)).unwrap();

        let after = date(28).and_hms_opt(0, 0, 0).unwrap();
        let found = graph.flights_between("FRA", "JFK", after, 5).unwrap();
        assert_eq!(
            found.iter().map(|e| e.flight_number).collect::<Vec<_>>(),
            vec![400, 404]
        );
    }

    #[test]
    fn test_flights_on_matches_flight_date_only() {
        let mut graph = MemoryGraph::new();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 600)).unwrap();
        graph.upsert_flight(edge("FRA", "JFK", 400, 29, 600)).unwrap();

        let today = graph.flights_on(date(28)).unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].flight_date, date(28));
    }

    #[test]
    fn test_upsert_flight_replaces_by_key() {
        let mut graph = MemoryGraph::new();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 600)).unwrap();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 600)).unwrap();
        assert_eq!(graph.flight_count().unwrap(), 1);
    }

    #[test]
    fn test_delete_all_flights_reports_count() {
        let mut graph = MemoryGraph::new();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 600)).unwrap();
        graph.upsert_flight(edge("FRA", "LHR", 900, 28, 480)).unwrap();
        assert_eq!(graph.delete_all_flights().unwrap(), 2);
        assert_eq!(graph.flight_count().unwrap(), 0);
    }

    #[test]
    fn test_graph_file_round_trip() {
        let mut graph = MemoryGraph::new();
        graph.upsert_airport(AirportNode::bare("FRA")).unwrap();
        graph.upsert_flight(edge("FRA", "JFK", 400, 28, 600)).unwrap();

        let path = std::env::temp_dir().join("flightgraph-store-test.json");
        graph.save(&path).expect("save should succeed");
        let restored = MemoryGraph::load(&path).expect("load should succeed");
        std::fs::remove_file(&path).ok();

        assert_eq!(restored.flight_count().unwrap(), 1);
        assert_eq!(restored.airport("FRA").unwrap(), Some(AirportNode::bare("FRA")));
        let after = date(28).and_hms_opt(0, 0, 0).unwrap();
        let flights = restored.departures("FRA", after, 5).unwrap();
        assert_eq!(flights[0].departure_time, date(28).and_hms_opt(10, 0, 0).unwrap());
    }
}
