use geo::Coord;
use serde::{Deserialize, Serialize};

/// an airport node in the flight graph, keyed by its IATA code. nodes created
/// by the merge writer for an unknown code start out bare (code only) and are
/// enriched by a later airport-ingestion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportNode {
    /// three-letter IATA airport identifier, the node key
    pub iata: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl AirportNode {
    /// a placeholder node carrying only its IATA code.
    pub fn bare(iata: &str) -> AirportNode {
        AirportNode {
            iata: iata.to_string(),
            name: None,
            country: None,
            city: None,
            lat: None,
            lon: None,
        }
    }

    /// the airport location as an x=lon, y=lat coordinate, if known.
    pub fn coord(&self) -> Option<Coord<f64>> {
        match (self.lon, self.lat) {
            (Some(lon), Some(lat)) => Some(Coord { x: lon, y: lat }),
            _ => None,
        }
    }
}
