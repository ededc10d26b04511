use anyhow::Result;
use clap::Parser;
use gmaps_rust::{
    sdk::config::DirectionsConfig, sdk::directions::DirectionsClient,
    sdk::itinerary::write_itinerary, sdk::util::log::init_logging,
};
use std::io;

/// A CLI tool to fetch and print driving directions between two addresses
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Starting point
    #[arg(long, default_value = "Google San Francisco, San Francisco, CA")]
    origin: String,

    /// Destination
    #[arg(
        long,
        default_value = "Google Headquarters, Amphitheatre Parkway, Mountain View, CA"
    )]
    destination: String,
}

fn main() -> Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = DirectionsConfig::from_env();
    let client = DirectionsClient::new(config);

    log::info!("Requesting directions: {} -> {}", cli.origin, cli.destination);
    let directions = client.get_directions(&cli.origin, &cli.destination)?;
    log::info!(
        "Service returned {} route(s), status {:?}",
        directions.routes.len(),
        directions.status
    );

    let stdout = io::stdout();
    write_itinerary(&mut stdout.lock(), &cli.origin, &cli.destination, &directions)?;

    Ok(())
}
