//! Labeled multigraph container.
//!
//! `LabeledGraph` owns every vertex and edge record. Callers only ever hold
//! `VertexId` / `EdgeId` handles and go through the graph to read or change
//! payloads.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use common_error::{AirgraphError, AirgraphResult};
use log::{debug, trace};

use super::identifiers::{new_graph_id, EdgeId, GraphId, VertexId};

#[derive(Debug)]
struct VertexEntry<V> {
    data: V,
    /// Edges where this vertex is the source or the target.
    incident: BTreeSet<EdgeId>,
}

#[derive(Debug)]
struct EdgeEntry<E> {
    data: E,
    source: VertexId,
    target: VertexId,
}

/// An in-memory, directed, labeled multigraph.
///
/// Vertices carry a payload of type `V` and edges a payload of type `E`.
/// Any number of edges may join the same ordered pair of vertices, and an
/// edge may start and end at the same vertex.
///
/// Records are keyed by a per-graph sequence number, so enumeration follows
/// insertion order and a removed handle is never issued again.
///
/// ## Example
///
/// ```rust
/// use airgraph_core::LabeledGraph;
///
/// let mut graph = LabeledGraph::new();
/// let hnl = graph.insert_vertex("HNL");
/// let lax = graph.insert_vertex("LAX");
/// let flight = graph.insert_edge(hnl, lax, ("F1", 2555)).unwrap();
///
/// assert_eq!(graph.degree(hnl).unwrap(), 1);
/// assert!(graph.remove_vertex(hnl).is_err());
///
/// graph.remove_edge(flight).unwrap();
/// assert_eq!(graph.remove_vertex(hnl).unwrap(), "HNL");
/// ```
#[derive(Debug)]
pub struct LabeledGraph<V, E> {
    id: GraphId,
    vertices: BTreeMap<u64, VertexEntry<V>>,
    edges: BTreeMap<u64, EdgeEntry<E>>,
    next_vertex: u64,
    next_edge: u64,
}

impl<V, E> Default for LabeledGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> LabeledGraph<V, E> {
    /// Creates an empty graph with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: new_graph_id(),
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_vertex: 0,
            next_edge: 0,
        }
    }

    /// Returns the identity of this graph instance.
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Returns the number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if `vertex` is live in this graph.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.graph() == self.id && self.vertices.contains_key(&vertex.index())
    }

    /// Returns true if `edge` is live in this graph.
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.graph() == self.id && self.edges.contains_key(&edge.index())
    }

    /// Inserts a vertex carrying `data` and returns its handle.
    pub fn insert_vertex(&mut self, data: V) -> VertexId {
        let id = VertexId::new(self.id, self.next_vertex);
        self.next_vertex += 1;
        self.vertices.insert(
            id.index(),
            VertexEntry {
                data,
                incident: BTreeSet::new(),
            },
        );
        trace!("inserted vertex {id}");
        id
    }

    /// Inserts a directed edge from `source` to `target` carrying `data`.
    ///
    /// Both endpoints must be live; otherwise `InvalidHandle` is returned and
    /// the graph is left untouched.
    pub fn insert_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        data: E,
    ) -> AirgraphResult<EdgeId> {
        self.vertex_entry(source)?;
        self.vertex_entry(target)?;

        let id = EdgeId::new(self.id, self.next_edge);
        self.next_edge += 1;
        for endpoint in [source, target] {
            if let Some(entry) = self.vertices.get_mut(&endpoint.index()) {
                entry.incident.insert(id);
            }
        }
        self.edges.insert(
            id.index(),
            EdgeEntry {
                data,
                source,
                target,
            },
        );
        trace!("inserted edge {id}: {source} -> {target}");
        Ok(id)
    }

    /// Removes an isolated vertex and returns its payload.
    ///
    /// Fails with `VertexHasIncidentEdges` while any edge still touches the
    /// vertex, leaving the graph unchanged.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> AirgraphResult<V> {
        let incident = self.vertex_entry(vertex)?.incident.len();
        if incident > 0 {
            debug!("refusing to remove {vertex}: {incident} incident edge(s)");
            return Err(AirgraphError::vertex_has_incident_edges(vertex, incident));
        }

        let entry = self
            .vertices
            .remove(&vertex.index())
            .ok_or_else(|| AirgraphError::invalid_handle(vertex))?;
        debug!("removed vertex {vertex}");
        Ok(entry.data)
    }

    /// Removes an edge and returns its payload. Endpoints are left in place.
    pub fn remove_edge(&mut self, edge: EdgeId) -> AirgraphResult<E> {
        if edge.graph() != self.id {
            return Err(AirgraphError::invalid_handle(edge));
        }
        let entry = self
            .edges
            .remove(&edge.index())
            .ok_or_else(|| AirgraphError::invalid_handle(edge))?;

        for endpoint in [entry.source, entry.target] {
            if let Some(vertex) = self.vertices.get_mut(&endpoint.index()) {
                vertex.incident.remove(&edge);
            }
        }
        debug!("removed edge {edge}");
        Ok(entry.data)
    }

    /// Iterates over live vertex handles in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.vertices.keys().map(move |&index| VertexId::new(self.id, index))
    }

    /// Iterates over live edge handles in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = EdgeId> + '_ {
        self.edges.keys().map(move |&index| EdgeId::new(self.id, index))
    }

    /// Iterates over vertex handles together with their payloads.
    pub fn vertex_entries(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices
            .iter()
            .map(move |(&index, entry)| (VertexId::new(self.id, index), &entry.data))
    }

    /// Iterates over edge handles together with their payloads.
    pub fn edge_entries(&self) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.edges
            .iter()
            .map(move |(&index, entry)| (EdgeId::new(self.id, index), &entry.data))
    }

    /// Returns every edge where `vertex` is the source or the target.
    ///
    /// Each edge appears once, self-loops included, in insertion order.
    pub fn incident_edges(
        &self,
        vertex: VertexId,
    ) -> AirgraphResult<impl ExactSizeIterator<Item = EdgeId> + '_> {
        Ok(self.vertex_entry(vertex)?.incident.iter().copied())
    }

    /// Returns the number of edges incident to `vertex`.
    pub fn degree(&self, vertex: VertexId) -> AirgraphResult<usize> {
        Ok(self.vertex_entry(vertex)?.incident.len())
    }

    /// Returns the `(source, target)` pair of an edge.
    pub fn endpoints(&self, edge: EdgeId) -> AirgraphResult<(VertexId, VertexId)> {
        let entry = self.edge_entry(edge)?;
        Ok((entry.source, entry.target))
    }

    /// Returns the endpoint of `edge` that is not `vertex`.
    ///
    /// For a self-loop the vertex itself is returned.
    pub fn opposite(&self, vertex: VertexId, edge: EdgeId) -> AirgraphResult<VertexId> {
        self.vertex_entry(vertex)?;
        let entry = self.edge_entry(edge)?;
        if entry.source == vertex {
            Ok(entry.target)
        } else if entry.target == vertex {
            Ok(entry.source)
        } else {
            Err(AirgraphError::invalid_handle(format_args!(
                "{edge} is not incident to {vertex}"
            )))
        }
    }

    /// Returns true if at least one edge joins `u` and `v` in either direction.
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> AirgraphResult<bool> {
        let u_entry = self.vertex_entry(u)?;
        let v_entry = self.vertex_entry(v)?;
        // Scan the smaller adjacency list.
        let (small, other) = if u_entry.incident.len() <= v_entry.incident.len() {
            (u_entry, v)
        } else {
            (v_entry, u)
        };
        Ok(small.incident.iter().any(|edge| {
            self.edges.get(&edge.index()).is_some_and(|entry| {
                entry.source == other || entry.target == other
            })
        }))
    }

    /// Returns the distinct vertices sharing an edge with `vertex`.
    ///
    /// Neighbors are listed in the order their first shared edge was
    /// inserted. A self-loop does not make a vertex its own neighbor.
    pub fn neighbors(&self, vertex: VertexId) -> AirgraphResult<Vec<VertexId>> {
        let entry = self.vertex_entry(vertex)?;
        let mut seen = HashSet::with_capacity(entry.incident.len());
        seen.insert(vertex);

        let mut neighbors = Vec::new();
        for edge in &entry.incident {
            if let Some(edge_entry) = self.edges.get(&edge.index()) {
                for other in [edge_entry.source, edge_entry.target] {
                    if seen.insert(other) {
                        neighbors.push(other);
                    }
                }
            }
        }
        Ok(neighbors)
    }

    /// Returns the payload of a vertex.
    pub fn vertex(&self, vertex: VertexId) -> AirgraphResult<&V> {
        Ok(&self.vertex_entry(vertex)?.data)
    }

    /// Returns a mutable reference to the payload of a vertex.
    pub fn vertex_mut(&mut self, vertex: VertexId) -> AirgraphResult<&mut V> {
        if vertex.graph() != self.id {
            return Err(AirgraphError::invalid_handle(vertex));
        }
        self.vertices
            .get_mut(&vertex.index())
            .map(|entry| &mut entry.data)
            .ok_or_else(|| AirgraphError::invalid_handle(vertex))
    }

    /// Returns the payload of an edge.
    pub fn edge(&self, edge: EdgeId) -> AirgraphResult<&E> {
        Ok(&self.edge_entry(edge)?.data)
    }

    /// Returns a mutable reference to the payload of an edge.
    pub fn edge_mut(&mut self, edge: EdgeId) -> AirgraphResult<&mut E> {
        if edge.graph() != self.id {
            return Err(AirgraphError::invalid_handle(edge));
        }
        self.edges
            .get_mut(&edge.index())
            .map(|entry| &mut entry.data)
            .ok_or_else(|| AirgraphError::invalid_handle(edge))
    }

    /// Returns the payload behind any vertex or edge handle.
    pub fn element<H: Element<V, E>>(&self, handle: H) -> AirgraphResult<&H::Payload> {
        handle.resolve(self)
    }

    /// Swaps a vertex payload, returning the previous one.
    pub fn replace_vertex(&mut self, vertex: VertexId, data: V) -> AirgraphResult<V> {
        Ok(std::mem::replace(self.vertex_mut(vertex)?, data))
    }

    /// Swaps an edge payload, returning the previous one.
    pub fn replace_edge(&mut self, edge: EdgeId, data: E) -> AirgraphResult<E> {
        Ok(std::mem::replace(self.edge_mut(edge)?, data))
    }

    /// Returns the first vertex, in insertion order, whose payload matches.
    pub fn find_vertex<F>(&self, mut predicate: F) -> Option<VertexId>
    where
        F: FnMut(&V) -> bool,
    {
        self.vertex_entries()
            .find(|(_, data)| predicate(data))
            .map(|(id, _)| id)
    }

    /// Returns the first edge, in insertion order, whose payload matches.
    pub fn find_edge<F>(&self, mut predicate: F) -> Option<EdgeId>
    where
        F: FnMut(&E) -> bool,
    {
        self.edge_entries()
            .find(|(_, data)| predicate(data))
            .map(|(id, _)| id)
    }

    /// Validates that edge records and adjacency lists agree.
    pub fn validate(&self) -> AirgraphResult<()> {
        for (&index, edge) in &self.edges {
            let edge_id = EdgeId::new(self.id, index);
            for endpoint in [edge.source, edge.target] {
                let vertex = self.vertex_entry(endpoint).map_err(|_| {
                    AirgraphError::internal(format!("{edge_id} points at missing {endpoint}"))
                })?;
                if !vertex.incident.contains(&edge_id) {
                    return Err(AirgraphError::internal(format!(
                        "{edge_id} missing from adjacency of {endpoint}"
                    )));
                }
            }
        }

        for (&index, vertex) in &self.vertices {
            let vertex_id = VertexId::new(self.id, index);
            for &edge_id in &vertex.incident {
                let edge = self.edge_entry(edge_id).map_err(|_| {
                    AirgraphError::internal(format!("{vertex_id} lists missing {edge_id}"))
                })?;
                if edge.source != vertex_id && edge.target != vertex_id {
                    return Err(AirgraphError::internal(format!(
                        "{vertex_id} lists {edge_id} which does not touch it"
                    )));
                }
            }
        }

        Ok(())
    }

    fn vertex_entry(&self, vertex: VertexId) -> AirgraphResult<&VertexEntry<V>> {
        if vertex.graph() != self.id {
            return Err(AirgraphError::invalid_handle(vertex));
        }
        self.vertices
            .get(&vertex.index())
            .ok_or_else(|| AirgraphError::invalid_handle(vertex))
    }

    fn edge_entry(&self, edge: EdgeId) -> AirgraphResult<&EdgeEntry<E>> {
        if edge.graph() != self.id {
            return Err(AirgraphError::invalid_handle(edge));
        }
        self.edges
            .get(&edge.index())
            .ok_or_else(|| AirgraphError::invalid_handle(edge))
    }
}

/// A handle that resolves to a payload stored in a `LabeledGraph`.
pub trait Element<V, E>: Copy + fmt::Display {
    /// The payload type behind this kind of handle.
    type Payload;

    /// Looks the handle up in `graph`.
    fn resolve(self, graph: &LabeledGraph<V, E>) -> AirgraphResult<&Self::Payload>;
}

impl<V, E> Element<V, E> for VertexId {
    type Payload = V;

    fn resolve(self, graph: &LabeledGraph<V, E>) -> AirgraphResult<&V> {
        graph.vertex(self)
    }
}

impl<V, E> Element<V, E> for EdgeId {
    type Payload = E;

    fn resolve(self, graph: &LabeledGraph<V, E>) -> AirgraphResult<&E> {
        graph.edge(self)
    }
}
