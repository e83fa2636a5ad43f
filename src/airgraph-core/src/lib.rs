//! Core data model for Airgraph.
//!
//! This crate provides an in-memory, directed, labeled multigraph:
//! - `LabeledGraph<V, E>` owning vertex and edge payloads
//! - `VertexId` and `EdgeId` opaque handles that are never reused
//! - `GraphStats` and `max_degree_vertex` for aggregate statistics

pub mod graph;
pub mod stats;
pub mod testing;

#[cfg(test)]
mod proptest_utils;

// Re-export commonly used types
pub use graph::{EdgeId, Element, GraphId, LabeledGraph, VertexId};
pub use stats::{GraphStats, max_degree_vertex};
