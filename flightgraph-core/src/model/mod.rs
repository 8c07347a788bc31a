mod airport;
mod flight;
mod route;
mod status;
pub mod time_ops;

pub use airport::AirportNode;
pub use flight::{FlightEdge, FlightInstance};
pub use route::{LegSpec, RouteRecord};
pub use status::{FlightStatus, FlightStatusCode};
