//! Aggregate statistics over a `LabeledGraph`.

use crate::graph::{LabeledGraph, VertexId};

/// Returns the vertex with the most incident edges and its degree.
///
/// Vertices are scanned in insertion order and a vertex only replaces the
/// current leader when its degree is strictly greater, so ties go to the
/// earliest inserted vertex. Isolated vertices never qualify: an empty graph
/// or one without edges yields `None`.
pub fn max_degree_vertex<V, E>(graph: &LabeledGraph<V, E>) -> Option<(VertexId, usize)> {
    let mut busiest = None;
    let mut max_degree = 0;

    for vertex in graph.vertices() {
        let degree = graph.degree(vertex).unwrap_or(0);
        if degree > max_degree {
            max_degree = degree;
            busiest = Some((vertex, degree));
        }
    }

    busiest
}

/// Snapshot of the counts a statistics panel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of live vertices.
    pub vertex_count: usize,
    /// Number of live edges.
    pub edge_count: usize,
    /// Vertex of maximum degree and that degree, if any vertex has an edge.
    pub busiest: Option<(VertexId, usize)>,
}

impl GraphStats {
    /// Collects statistics from the current state of `graph`.
    pub fn collect<V, E>(graph: &LabeledGraph<V, E>) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            busiest: max_degree_vertex(graph),
        }
    }

    /// Degree of the busiest vertex, or 0 when there is none.
    pub fn max_degree(&self) -> usize {
        self.busiest.map_or(0, |(_, degree)| degree)
    }
}
