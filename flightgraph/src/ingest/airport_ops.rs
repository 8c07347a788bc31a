//! airport reference ingestion. runs on its own cadence, separate from the
//! flight pipeline, and enriches airport nodes (including bare ones the merge
//! writer created) with name, country, city, and coordinates.
use std::io;

use serde::Deserialize;

use flightgraph_core::model::AirportNode;
use flightgraph_core::store::{GraphStore, StoreError};

use crate::ingest::FetchError;

/// one row of the airport reference CSV, with the source's header names.
#[derive(Debug, Deserialize)]
pub struct AirportRow {
    #[serde(rename = "Airport Name")]
    pub airport_name: String,
    #[serde(rename = "three-digit code")]
    pub iata: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "l1")]
    pub lat: f64,
    #[serde(rename = "l2")]
    pub lon: f64,
}

impl From<AirportRow> for AirportNode {
    fn from(row: AirportRow) -> AirportNode {
        AirportNode {
            iata: row.iata,
            name: Some(row.airport_name),
            country: Some(row.country),
            city: Some(row.city),
            lat: Some(row.lat),
            lon: Some(row.lon),
        }
    }
}

/// downloads the airport reference CSV and decodes its rows.
pub fn fetch_airports(
    http: &reqwest::blocking::Client,
    url: &str,
) -> Result<Vec<AirportNode>, FetchError> {
    let body = http
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| FetchError::FeedRequest {
            url: url.to_string(),
            source: e,
        })?
        .text()
        .map_err(|e| FetchError::FeedDecode {
            url: url.to_string(),
            source: e,
        })?;
    Ok(read_airport_csv(body.as_bytes()))
}

/// decodes airport rows, skipping (with a warning) any row that fails to
/// parse rather than losing the batch.
pub fn read_airport_csv<R: io::Read>(reader: R) -> Vec<AirportNode> {
    let mut airports = Vec::new();
    for result in csv::Reader::from_reader(reader).into_deserialize::<AirportRow>() {
        match result {
            Ok(row) => airports.push(AirportNode::from(row)),
            Err(e) => log::warn!("skipping unreadable airport row: {e}"),
        }
    }
    airports
}

/// upserts every airport, returning how many were written. flight edges are
/// untouched; their denormalized display fields keep whatever was resolved at
/// merge time.
pub fn ingest_airports(
    store: &mut dyn GraphStore,
    airports: Vec<AirportNode>,
) -> Result<usize, StoreError> {
    let mut written = 0;
    for airport in airports {
        store.upsert_airport(airport)?;
        written += 1;
    }
    log::info!("upserted {written} airport nodes");
    Ok(written)
}
