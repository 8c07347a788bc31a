use flightgraph_core::store::StoreError;

/// failures against the external schedule/status/airport feeds. any of these
/// is fatal to the ingestion run that hit it; nothing is committed partially
/// on the fetch side.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("failed building http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("token request to '{url}' failed: {source}")]
    TokenRequest {
        url: String,
        source: reqwest::Error,
    },
    #[error("failed decoding token response: {0}")]
    TokenDecode(#[source] reqwest::Error),
    #[error("feed request to '{url}' failed: {source}")]
    FeedRequest {
        url: String,
        source: reqwest::Error,
    },
    #[error("failed decoding feed response from '{url}': {source}")]
    FeedDecode {
        url: String,
        source: reqwest::Error,
    },
    #[error("no live status found for flight '{flight}'")]
    StatusNotFound { flight: String },
}

/// inconsistencies found while expanding a leg group over its validity
/// window. the offending group is skipped and logged; the batch continues.
#[derive(thiserror::Error, Debug)]
pub enum ExpandError {
    #[error(
        "validity window for {airline}{flight_number} leg {sequence_number} \
         ends {valid_to} before it starts {valid_from}"
    )]
    WindowEndsBeforeStart {
        airline: String,
        flight_number: u32,
        sequence_number: u32,
        valid_from: chrono::NaiveDate,
        valid_to: chrono::NaiveDate,
    },
    #[error("date overflow expanding window starting {0}")]
    DateOverflow(chrono::NaiveDate),
}

/// umbrella error for the pipeline entry points.
#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("failed loading ingestion settings: {0}")]
    Settings(#[from] config::ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("graph write failure, aborting remaining writes: {0}")]
    Merge(#[from] StoreError),
}
