use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{AirportNode, FlightEdge};
use crate::store::StoreError;

/// the seam between the ingestion pipeline and whatever holds the flight
/// graph. implementations must provide upsert-by-key semantics: airports keyed
/// by IATA code, flight edges keyed by [`FlightEdge::key`].
///
/// query methods answer with an empty result for unknown or malformed codes
/// rather than an error; storage errors are reserved for backend failures.
pub trait GraphStore {
    /// inserts or fully replaces an airport node.
    fn upsert_airport(&mut self, airport: AirportNode) -> Result<(), StoreError>;

    /// inserts a bare node for the code if absent. never downgrades an
    /// already-enriched node.
    fn ensure_airport(&mut self, iata: &str) -> Result<(), StoreError>;

    fn airport(&self, iata: &str) -> Result<Option<AirportNode>, StoreError>;

    fn list_airports(&self) -> Result<Vec<AirportNode>, StoreError>;

    /// removes every flight edge in the graph, returning how many were
    /// removed. first half of the full-replace merge.
    fn delete_all_flights(&mut self) -> Result<usize, StoreError>;

    /// inserts or replaces one flight edge by its composite key.
    fn upsert_flight(&mut self, edge: FlightEdge) -> Result<(), StoreError>;

    fn flight_count(&self) -> Result<usize, StoreError>;

    /// flights departing `iata` strictly after `after`, ordered by departure
    /// time, at most `limit` results.
    fn departures(
        &self,
        iata: &str,
        after: NaiveDateTime,
        limit: usize,
    ) -> Result<Vec<FlightEdge>, StoreError>;

    /// flights arriving at `iata` strictly after `after`, ordered by arrival
    /// time, at most `limit` results.
    fn arrivals(
        &self,
        iata: &str,
        after: NaiveDateTime,
        limit: usize,
    ) -> Result<Vec<FlightEdge>, StoreError>;

    /// flights from `origin` to `destination` departing strictly after
    /// `after`, ordered by departure time, at most `limit` results.
    fn flights_between(
        &self,
        origin: &str,
        destination: &str,
        after: NaiveDateTime,
        limit: usize,
    ) -> Result<Vec<FlightEdge>, StoreError>;

    /// all flights operating on the given calendar day, ordered by departure
    /// time.
    fn flights_on(&self, date: NaiveDate) -> Result<Vec<FlightEdge>, StoreError>;
}
