//! Testing utilities and helpers for airgraph-core.
//!
//! `GraphFixture` builds small named graphs so tests can refer to vertices
//! and edges by name instead of threading handles around.

use std::collections::HashMap;

use crate::graph::{EdgeId, LabeledGraph, VertexId};

/// Test fixture builder for common graph scenarios.
///
/// Vertex payloads are the vertex names; edge payloads are the edge names.
#[derive(Debug, Default)]
pub struct GraphFixture {
    graph: LabeledGraph<String, String>,
    vertices: HashMap<String, VertexId>,
    edges: HashMap<String, EdgeId>,
}

impl GraphFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Two airports joined by one flight: `HNL -> LAX` named `F1`.
    pub fn hnl_lax() -> Self {
        let mut fixture = Self::new();
        fixture.add_vertex("HNL");
        fixture.add_vertex("LAX");
        fixture.add_edge("F1", "HNL", "LAX");
        fixture
    }

    /// Three vertices with degrees 1, 3 and 2.
    pub fn uneven_degrees() -> Self {
        let mut fixture = Self::new();
        fixture.add_vertex("a");
        fixture.add_vertex("b");
        fixture.add_vertex("c");
        fixture.add_edge("ab", "a", "b");
        fixture.add_edge("bc", "b", "c");
        fixture.add_edge("cb", "c", "b");
        fixture
    }

    /// A directed cycle `v0 -> v1 -> ... -> v{n-1} -> v0`.
    pub fn cycle(n: usize) -> Self {
        let mut fixture = Self::new();
        for i in 0..n {
            fixture.add_vertex(&format!("v{i}"));
        }
        for i in 0..n {
            let from = format!("v{i}");
            let to = format!("v{}", (i + 1) % n);
            fixture.add_edge(&format!("{from}->{to}"), &from, &to);
        }
        fixture
    }

    /// Add a named vertex and return its handle.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        let id = self.graph.insert_vertex(name.to_string());
        self.vertices.insert(name.to_string(), id);
        id
    }

    /// Add a named edge between two named vertices.
    ///
    /// # Panics
    /// Panics if either vertex name is unknown to the fixture.
    pub fn add_edge(&mut self, name: &str, from: &str, to: &str) -> EdgeId {
        let source = self.vertex(from);
        let target = self.vertex(to);
        let id = self
            .graph
            .insert_edge(source, target, name.to_string())
            .expect("fixture endpoints are live");
        self.edges.insert(name.to_string(), id);
        id
    }

    /// Handle of a named vertex.
    ///
    /// # Panics
    /// Panics if no vertex was added under `name`.
    pub fn vertex(&self, name: &str) -> VertexId {
        *self
            .vertices
            .get(name)
            .unwrap_or_else(|| panic!("no vertex named {name}"))
    }

    /// Handle of a named edge.
    ///
    /// # Panics
    /// Panics if no edge was added under `name`.
    pub fn edge(&self, name: &str) -> EdgeId {
        *self
            .edges
            .get(name)
            .unwrap_or_else(|| panic!("no edge named {name}"))
    }

    /// Borrow the underlying graph.
    pub fn graph(&self) -> &LabeledGraph<String, String> {
        &self.graph
    }

    /// Mutably borrow the underlying graph.
    pub fn graph_mut(&mut self) -> &mut LabeledGraph<String, String> {
        &mut self.graph
    }

    /// Consume the fixture and return the graph.
    pub fn into_graph(self) -> LabeledGraph<String, String> {
        self.graph
    }
}
