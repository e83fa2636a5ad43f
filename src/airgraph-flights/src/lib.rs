//! Airgraph Flights - airports and flights on a labeled multigraph
//!
//! This crate layers a small airline domain over `airgraph-core`: airports
//! are vertices, flights are directed edges. A `FlightNetwork` owns the
//! graph and applies the caller-side policies (non-empty codes, numeric
//! distances, no same-airport flights), and a `Session` drives it from
//! line commands.
//!
//! # Available Binaries
//!
//! - **`flights-demo`**: command loop over a seeded flight network
//!
//! # Usage
//!
//! ```bash
//! cargo run --package airgraph-flights --bin flights-demo -- --seed flights
//! ```

pub mod command;
pub mod data;
pub mod model;
pub mod network;
pub mod session;
pub mod utils;

pub use command::Command;
pub use data::{flight_network, letter_graph};
pub use model::{Airport, Flight};
pub use network::{BusiestAirport, FlightNetwork, NetworkStatistics, user_message};
pub use session::{Outcome, RunSummary, Session};
pub use utils::{network_listing, network_tree, print_divider, print_header};
