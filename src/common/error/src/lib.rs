//! Error types and result aliases for Airgraph.
//!
//! Every crate in the workspace reports failures through [`AirgraphError`],
//! so a caller driving the graph and the flights controller matches on a
//! single taxonomy.

mod error;

pub use error::{AirgraphError, AirgraphResult};
