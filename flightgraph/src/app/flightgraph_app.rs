use super::Operation;
use clap::Parser;

/// command line tool for the airline flight graph: schedule and airport
/// ingestion plus live flight status lookups
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FlightGraphApp {
    #[command(subcommand)]
    pub op: Operation,
    /// ingestion settings TOML file
    #[arg(long, default_value_t=String::from("flightgraph.toml"))]
    pub config: String,
}
