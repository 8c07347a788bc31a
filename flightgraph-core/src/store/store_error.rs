#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed reading graph file '{path}': {source}")]
    GraphFileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("failed writing graph file '{path}': {source}")]
    GraphFileWrite {
        path: String,
        source: std::io::Error,
    },
    #[error("failed encoding graph file contents: {0}")]
    GraphFileCodec(#[from] serde_json::Error),
    #[error("graph backend failure: {0}")]
    Backend(String),
}
