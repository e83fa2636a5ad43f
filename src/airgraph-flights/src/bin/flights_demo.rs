//! Flights Demo - command loop over an airport network
//!
//! This binary drives a flight network from a terminal session:
//! 1. Load configuration and seed the network
//! 2. Print the statistics panel
//! 3. Read commands from a script or stdin and apply them
//! 4. Print the final statistics
//!
//! # Usage
//!
//! ```bash
//! cargo run --package airgraph-flights --bin flights-demo -- --seed flights
//! echo "stats" | cargo run --package airgraph-flights --bin flights-demo
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};

use airgraph_flights::{FlightNetwork, Session, print_divider, print_header};
use common_config::{AirgraphConfig, SeedDataset};
use common_error::AirgraphResult;

/// Flights Demo CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "flights-demo")]
#[command(about = "Add and remove airports and flights from the command line")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting network: flights, letters or empty (overrides the config file)
    #[arg(short, long)]
    seed: Option<SeedDataset>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> AirgraphResult<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    let mut config = match &args.config {
        Some(path) => AirgraphConfig::from_file(path)?,
        None => AirgraphConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.network.seed = seed;
    }
    info!("starting with seed '{}'", config.network.seed);

    let network = FlightNetwork::new(config.network.clone())?;
    let mut session = Session::new(network, config.display.clone());

    print_header("Flights Demo");
    println!("{}", session.network().statistics());
    print_divider();
    println!("Type 'help' for commands.");

    let summary = match &args.script {
        Some(path) => session.run(BufReader::new(File::open(path)?), io::stdout().lock())?,
        None => session.run(io::stdin().lock(), io::stdout().lock())?,
    };

    print_header("Final Statistics");
    println!("{}", session.network().statistics());
    info!(
        "{} command(s) executed ({} changed the network), {} rejected",
        summary.executed, summary.mutations, summary.failed
    );

    Ok(())
}
