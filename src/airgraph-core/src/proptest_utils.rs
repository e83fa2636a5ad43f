//! Property-based tests for the graph container.
//!
//! Random operation sequences are replayed against a `LabeledGraph` and the
//! structural invariants are checked after every step.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::graph::{EdgeId, LabeledGraph, VertexId};

// =========================================================================
// Operation strategy
// =========================================================================

/// One mutation in a generated scenario.
///
/// Indices select among handles issued so far (live or not), so sequences
/// naturally exercise stale handles.
#[derive(Debug, Clone)]
enum Op {
    InsertVertex(u16),
    InsertEdge(usize, usize, u16),
    RemoveVertex(usize),
    RemoveEdge(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(Op::InsertVertex),
        4 => (any::<usize>(), any::<usize>(), any::<u16>())
            .prop_map(|(s, t, w)| Op::InsertEdge(s, t, w)),
        1 => any::<usize>().prop_map(Op::RemoveVertex),
        2 => any::<usize>().prop_map(Op::RemoveEdge),
    ]
}

fn pick<T: Copy>(items: &[T], index: usize) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[index % items.len()])
    }
}

// =========================================================================
// Property Tests
// =========================================================================

proptest! {
    /// Every issued handle is distinct from every handle issued before it.
    #[test]
    fn handles_are_never_reused(ops in prop::collection::vec(arb_op(), 0..80)) {
        let mut graph: LabeledGraph<u16, u16> = LabeledGraph::new();
        let mut issued_vertices: Vec<VertexId> = Vec::new();
        let mut issued_edges: Vec<EdgeId> = Vec::new();
        let mut seen_vertices = HashSet::new();
        let mut seen_edges = HashSet::new();

        for op in ops {
            match op {
                Op::InsertVertex(w) => {
                    let v = graph.insert_vertex(w);
                    prop_assert!(seen_vertices.insert(v));
                    issued_vertices.push(v);
                }
                Op::InsertEdge(s, t, w) => {
                    let endpoints = (pick(&issued_vertices, s), pick(&issued_vertices, t));
                    if let (Some(s), Some(t)) = endpoints {
                        if let Ok(e) = graph.insert_edge(s, t, w) {
                            prop_assert!(seen_edges.insert(e));
                            issued_edges.push(e);
                        }
                    }
                }
                Op::RemoveVertex(i) => {
                    if let Some(v) = pick(&issued_vertices, i) {
                        let _ = graph.remove_vertex(v);
                    }
                }
                Op::RemoveEdge(i) => {
                    if let Some(e) = pick(&issued_edges, i) {
                        let _ = graph.remove_edge(e);
                    }
                }
            }
            prop_assert!(graph.validate().is_ok());
        }
    }

    /// Failed mutations leave the vertex and edge sets untouched.
    #[test]
    fn failed_mutations_are_atomic(ops in prop::collection::vec(arb_op(), 0..80)) {
        let mut graph: LabeledGraph<u16, u16> = LabeledGraph::new();
        let mut issued_vertices: Vec<VertexId> = Vec::new();
        let mut issued_edges: Vec<EdgeId> = Vec::new();

        for op in ops {
            let vertices_before: Vec<_> = graph.vertices().collect();
            let edges_before: Vec<_> = graph.edges().collect();

            let failed = match op {
                Op::InsertVertex(w) => {
                    issued_vertices.push(graph.insert_vertex(w));
                    false
                }
                Op::InsertEdge(s, t, w) => {
                    match (pick(&issued_vertices, s), pick(&issued_vertices, t)) {
                        (Some(s), Some(t)) => match graph.insert_edge(s, t, w) {
                            Ok(e) => {
                                issued_edges.push(e);
                                false
                            }
                            Err(err) => {
                                prop_assert!(err.is_invalid_handle());
                                true
                            }
                        },
                        _ => false,
                    }
                }
                Op::RemoveVertex(i) => match pick(&issued_vertices, i) {
                    Some(v) => {
                        let expected_refusal = graph.degree(v).map_or(false, |d| d > 0);
                        match graph.remove_vertex(v) {
                            Ok(_) => false,
                            Err(err) => {
                                prop_assert_eq!(
                                    expected_refusal,
                                    err.is_vertex_has_incident_edges()
                                );
                                true
                            }
                        }
                    }
                    None => false,
                },
                Op::RemoveEdge(i) => match pick(&issued_edges, i) {
                    Some(e) => graph.remove_edge(e).is_err(),
                    None => false,
                },
            };

            if failed {
                prop_assert_eq!(graph.vertices().collect::<Vec<_>>(), vertices_before);
                prop_assert_eq!(graph.edges().collect::<Vec<_>>(), edges_before);
            }
        }
    }

    /// Removing an edge detaches it from both endpoints and keeps them alive.
    #[test]
    fn remove_edge_detaches_from_endpoints(
        n in 2usize..8,
        wiring in prop::collection::vec((0usize..8, 0usize..8), 1..20),
        victim in any::<usize>(),
    ) {
        let mut graph: LabeledGraph<usize, usize> = LabeledGraph::new();
        let vertices: Vec<_> = (0..n).map(|i| graph.insert_vertex(i)).collect();
        let edges: Vec<_> = wiring
            .iter()
            .enumerate()
            .map(|(i, &(s, t))| graph.insert_edge(vertices[s % n], vertices[t % n], i).unwrap())
            .collect();

        let edge = edges[victim % edges.len()];
        let (source, target) = graph.endpoints(edge).unwrap();
        graph.remove_edge(edge).unwrap();

        prop_assert!(!graph.edges().any(|e| e == edge));
        prop_assert!(!graph.incident_edges(source).unwrap().any(|e| e == edge));
        prop_assert!(!graph.incident_edges(target).unwrap().any(|e| e == edge));
        prop_assert!(graph.contains_vertex(source));
        prop_assert!(graph.contains_vertex(target));
        prop_assert_eq!(graph.vertex_count(), n);
    }

    /// Enumeration without intervening mutation is stable.
    #[test]
    fn enumeration_is_idempotent(
        n in 0usize..10,
        wiring in prop::collection::vec((0usize..10, 0usize..10), 0..20),
    ) {
        let mut graph: LabeledGraph<usize, ()> = LabeledGraph::new();
        let vertices: Vec<_> = (0..n).map(|i| graph.insert_vertex(i)).collect();
        if n > 0 {
            for (s, t) in wiring {
                graph.insert_edge(vertices[s % n], vertices[t % n], ()).unwrap();
            }
        }

        let first: Vec<_> = graph.vertices().collect();
        let second: Vec<_> = graph.vertices().collect();
        prop_assert_eq!(first, second);

        let first: Vec<_> = graph.edges().collect();
        let second: Vec<_> = graph.edges().collect();
        prop_assert_eq!(first, second);
    }

    /// The sum of degrees counts every non-loop edge twice and every loop once.
    #[test]
    fn degree_sum_matches_edges(
        n in 1usize..8,
        wiring in prop::collection::vec((0usize..8, 0usize..8), 0..24),
    ) {
        let mut graph: LabeledGraph<usize, ()> = LabeledGraph::new();
        let vertices: Vec<_> = (0..n).map(|i| graph.insert_vertex(i)).collect();
        let mut loops = 0;
        for (s, t) in &wiring {
            if s % n == t % n {
                loops += 1;
            }
            graph.insert_edge(vertices[s % n], vertices[t % n], ()).unwrap();
        }

        let degree_sum: usize = graph.vertices().map(|v| graph.degree(v).unwrap()).sum();
        prop_assert_eq!(degree_sum, 2 * wiring.len() - loops);
    }
}
