//! full-replace graph merge: the final pipeline stage. the previous flight
//! edge set is deleted wholesale, then the current instance set is written
//! out, creating bare airport nodes for any code the graph has not seen yet.
use flightgraph_core::model::{FlightEdge, FlightInstance};
use flightgraph_core::store::{GraphStore, StoreError};

/// replaces the graph's flight edges with the given instances. origin and
/// destination display fields (name, country) are resolved from the airport
/// nodes at write time and frozen onto the edge.
///
/// not transactional: a storage failure mid-batch aborts the remaining writes
/// and leaves the edges written so far in place, so readers may observe fewer
/// edges than either the old or new complete set until the next successful
/// run (at-least-once visibility, no cross-run snapshot isolation).
pub fn replace_flight_edges(
    store: &mut dyn GraphStore,
    instances: &[FlightInstance],
) -> Result<usize, StoreError> {
    let removed = store.delete_all_flights()?;
    log::info!("cleared {removed} flight edges");

    let mut written = 0;
    for instance in instances {
        store.ensure_airport(&instance.origin)?;
        store.ensure_airport(&instance.destination)?;
        let origin = store.airport(&instance.origin)?;
        let destination = store.airport(&instance.destination)?;
        let edge = FlightEdge::from_instance(instance, origin.as_ref(), destination.as_ref());
        store.upsert_flight(edge)?;
        written += 1;
    }
    log::info!("wrote {written} flight edges");
    Ok(written)
}
