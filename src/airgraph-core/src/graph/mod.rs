//! Labeled multigraph.
//!
//! This module provides the graph primitives:
//! - `VertexId` / `EdgeId` handles scoped to one graph instance
//! - `LabeledGraph` for the owning container
//! - `Element` for resolving either kind of handle to its payload

mod container;
mod identifiers;

pub use container::{Element, LabeledGraph};
pub use identifiers::{EdgeId, GraphId, VertexId};
