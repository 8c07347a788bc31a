pub mod app;
pub mod ingest;
