use std::path::Path;

use chrono::Utc;
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use flightgraph_core::model::time_ops::format_timestamp;
use flightgraph_core::model::FlightStatus;
use flightgraph_core::position;
use flightgraph_core::store::{GraphStore, MemoryGraph};

use crate::ingest::feed::FeedClient;
use crate::ingest::{airport_ops, pipeline_ops, IngestError, IngestSettings};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Operation {
    /// fetch the schedule feed and rebuild the flight edge set
    IngestFlights,
    /// fetch the airport reference data and enrich airport nodes
    IngestAirports,
    /// look up a flight's live status and interpolate its current position
    Status {
        /// flight designator, e.g. LH400
        #[arg(long)]
        flight: String,
    },
}

impl Operation {
    pub fn run(&self, config_file: &str) -> Result<(), IngestError> {
        let settings = IngestSettings::from_file(Path::new(config_file))?;
        let mut store = MemoryGraph::load(&settings.graph_file)?;

        match self {
            Operation::IngestFlights => {
                let client = FeedClient::new(settings.clone())?;
                let today = Utc::now().date_naive();
                let summary = pipeline_ops::run_flight_ingest(
                    &client,
                    &mut store,
                    today,
                    settings.window_days,
                )?;
                store.save(&settings.graph_file)?;
                println!("{summary}");
            }
            Operation::IngestAirports => {
                let http = reqwest::blocking::Client::new();
                let airports = airport_ops::fetch_airports(&http, &settings.airports_url)?;
                let written = airport_ops::ingest_airports(&mut store, airports)?;
                store.save(&settings.graph_file)?;
                println!("upserted {written} airports");
            }
            Operation::Status { flight } => {
                let client = FeedClient::new(settings.clone())?;
                let today = Utc::now().date_naive();
                let status = client.fetch_status(flight, today)?;
                report_status(&store, flight, &status)?;
            }
        }
        Ok(())
    }
}

/// prints the live status and, when the flight is trackable and both airports
/// have known coordinates, its interpolated position.
fn report_status(
    store: &MemoryGraph,
    flight: &str,
    status: &FlightStatus,
) -> Result<(), IngestError> {
    println!(
        "{flight} {} -> {}: {}",
        status.origin,
        status.destination,
        status.status_text.as_deref().unwrap_or("status unknown")
    );
    if let Some(scheduled) = status.scheduled_departure_utc {
        println!(
            "  scheduled departure {}",
            format_timestamp(&scheduled.naive_utc())
        );
    }
    if let Some(scheduled) = status.scheduled_arrival_utc {
        println!(
            "  scheduled arrival   {}",
            format_timestamp(&scheduled.naive_utc())
        );
    }

    let origin_coord = store.airport(&status.origin)?.and_then(|a| a.coord());
    let destination_coord = store.airport(&status.destination)?.and_then(|a| a.coord());
    match (origin_coord, destination_coord) {
        (Some(origin), Some(destination)) => {
            match position::display_position(status, origin, destination, Utc::now()) {
                Some(pos) => println!("  position lat {:.4}, lon {:.4}", pos.y, pos.x),
                None => println!("  no position: status unknown"),
            }
        }
        _ => println!("  no position: airport coordinates not ingested yet"),
    }
    Ok(())
}
