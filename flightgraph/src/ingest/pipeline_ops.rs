//! the batch ingestion pipeline: fetch, flatten, expand, merge. runs
//! single-threaded to completion or fails as a whole; a fresh invocation
//! always re-fetches and re-expands the full current window. concurrent runs
//! against the same store are not supported (the full-replace merge is not
//! safe under concurrent writers), so the invoking scheduler must serialize.
use std::fmt::Display;

use chrono::{NaiveDate, TimeDelta};

use flightgraph_core::store::GraphStore;

use crate::ingest::feed::FeedClient;
use crate::ingest::{expand_ops, flatten_ops, merge_ops, IngestError};

/// per-stage counts of one ingestion run, for logging and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub routes: usize,
    pub legs: usize,
    pub instances: usize,
    pub edges_written: usize,
}

impl Display for IngestSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} routes -> {} legs -> {} instances -> {} edges written",
            self.routes, self.legs, self.instances, self.edges_written
        )
    }
}

/// runs one full schedule-ingestion batch for the window
/// [today, today + window_days]. fetch failures are fatal to the run and
/// surface here before any graph write; malformed individual records were
/// already skipped upstream.
pub fn run_flight_ingest(
    client: &FeedClient,
    store: &mut dyn GraphStore,
    today: NaiveDate,
    window_days: i64,
) -> Result<IngestSummary, IngestError> {
    let end = today + TimeDelta::days(window_days);
    let routes = client.fetch_schedules(today, end)?;
    let n_routes = routes.len();
    log::info!("fetched {n_routes} route records for [{today}, {end}]");

    let legs = flatten_ops::flatten_routes(routes);
    let n_legs = legs.len();

    let instances = expand_ops::expand(legs);
    let n_instances = instances.len();

    let edges_written = merge_ops::replace_flight_edges(store, &instances)?;

    let summary = IngestSummary {
        routes: n_routes,
        legs: n_legs,
        instances: n_instances,
        edges_written,
    };
    log::info!("ingestion complete: {summary}");
    Ok(summary)
}
