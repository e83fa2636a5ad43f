//! Airgraph - in-memory labeled multigraph
//!
//! Airgraph stores vertices and directed edges that carry arbitrary
//! payloads, with opaque handles that are never reused. The flights crate
//! builds an airport network and a command session on top of it.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export member crates
pub use airgraph_core as core;
pub use airgraph_flights as flights;
pub use common_config as config;
pub use common_display as display;
pub use common_error as error;

pub use airgraph_core::{EdgeId, GraphStats, LabeledGraph, VertexId};
pub use common_error::{AirgraphError, AirgraphResult};

/// Airgraph version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
