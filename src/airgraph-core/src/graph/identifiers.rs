//! Handle types for graph elements.

use std::fmt;

/// Identifier of a graph instance.
///
/// Every handle records the graph that issued it, which lets a graph reject
/// handles that belong to another instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    /// Returns the raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Generate a new unique graph ID.
pub(crate) fn new_graph_id() -> GraphId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    GraphId(COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Opaque handle to a vertex.
///
/// Handles compare by identity. Two vertices carrying equal payloads still
/// have distinct handles, and a removed vertex's handle is never handed out
/// again by the same graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    graph: GraphId,
    index: u64,
}

impl VertexId {
    pub(crate) const fn new(graph: GraphId, index: u64) -> Self {
        Self { graph, index }
    }

    /// Returns the graph that issued this handle.
    pub const fn graph(self) -> GraphId {
        self.graph
    }

    /// Returns the insertion sequence number of the vertex.
    pub const fn index(self) -> u64 {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}@{}", self.index, self.graph)
    }
}

/// Opaque handle to an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    graph: GraphId,
    index: u64,
}

impl EdgeId {
    pub(crate) const fn new(graph: GraphId, index: u64) -> Self {
        Self { graph, index }
    }

    /// Returns the graph that issued this handle.
    pub const fn graph(self) -> GraphId {
        self.graph
    }

    /// Returns the insertion sequence number of the edge.
    pub const fn index(self) -> u64 {
        self.index
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}@{}", self.index, self.graph)
    }
}
