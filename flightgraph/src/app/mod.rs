mod flightgraph_app;
mod operation;

pub use flightgraph_app::FlightGraphApp;
pub use operation::Operation;
