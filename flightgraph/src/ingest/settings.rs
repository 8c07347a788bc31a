use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// ingestion configuration, loaded from a TOML file with
/// `FLIGHTGRAPH_`-prefixed environment overrides (so the feed client secret
/// can stay out of the file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSettings {
    /// oauth client id for the schedule feed's client-credentials exchange
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub schedules_url: String,
    pub status_url: String,
    /// airport reference CSV used to enrich airport nodes
    pub airports_url: String,
    /// two-letter airline code whose schedules are ingested
    pub airline: String,
    /// fetch window length: schedules are requested for [today, today + window_days]
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    /// operating-days mask sent to the feed, one digit per weekday
    #[serde(default = "default_days_of_operation")]
    pub days_of_operation: String,
    #[serde(default = "default_time_mode")]
    pub time_mode: String,
    /// where the graph file lives between runs
    pub graph_file: PathBuf,
}

fn default_window_days() -> i64 {
    2
}

fn default_days_of_operation() -> String {
    String::from("1234567")
}

fn default_time_mode() -> String {
    String::from("UTC")
}

impl IngestSettings {
    pub fn from_file(path: &Path) -> Result<IngestSettings, config::ConfigError> {
        Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("FLIGHTGRAPH"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use config::FileFormat;

    const SETTINGS_TOML: &str = r#"
        client_id = "abc123"
        client_secret = "shhh"
        token_url = "https://api.example.com/v1/oauth/token"
        schedules_url = "https://api.example.com/v1/flight-schedules/flightschedules/passenger"
        status_url = "https://api.example.com/v1/operations/flightstatus"
        airports_url = "https://example.com/airports.csv"
        airline = "LH"
        graph_file = "graph.json"
    "#;

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: IngestSettings = Config::builder()
            .add_source(File::from_str(SETTINGS_TOML, FileFormat::Toml))
            .build()
            .expect("should build")
            .try_deserialize()
            .expect("should deserialize");

        assert_eq!(settings.airline, "LH");
        assert_eq!(settings.window_days, 2);
        assert_eq!(settings.days_of_operation, "1234567");
        assert_eq!(settings.time_mode, "UTC");
        assert_eq!(settings.graph_file, PathBuf::from("graph.json"));
    }
}
