//! entry point for the flight graph CLI: schedule/airport ingestion runs and
//! live status lookups against the graph built by them.
use clap::Parser;
use flightgraph::app::FlightGraphApp;

fn main() {
    env_logger::init();
    let args = FlightGraphApp::parse();
    match args.op.run(&args.config) {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running flightgraph: {e}");
            std::process::exit(1);
        }
    }
}
