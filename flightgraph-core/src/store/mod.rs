mod graph_store;
mod memory_graph;
mod store_error;

pub use graph_store::GraphStore;
pub use memory_graph::MemoryGraph;
pub use store_error::StoreError;
