pub mod airport_ops;
pub mod expand_ops;
pub mod feed;
pub mod flatten_ops;
pub mod merge_ops;
pub mod pipeline_ops;

mod ingest_error;
mod settings;

pub use ingest_error::{ExpandError, FetchError, IngestError};
pub use settings::IngestSettings;
