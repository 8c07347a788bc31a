pub mod model;
pub mod position;
pub mod store;
