//! In-memory labeled graph storage
//!
//! Two coupled views of the same edge set, updated together inside every
//! mutating operation:
//! - adjacency index: vertex -> (neighbor -> edge record), for traversal
//!   and degree queries;
//! - edge table: (source, target) -> edge record, for whole-graph edge
//!   enumeration (Kruskal, persistence, export).
//!
//! Both are `IndexMap`s so iteration follows insertion order; that is what
//! makes "the first vertex" a deterministic choice for algorithms that need
//! an arbitrary start.
//!
//! The store is single-threaded and synchronous. Shared-reference methods
//! never mutate, so concurrent algorithm runs over one store are safe as
//! long as no `&mut self` call is interleaved; Rust's borrow rules enforce
//! that in-process.

use super::edge::EdgeRecord;
use indexmap::IndexMap;
use std::hash::Hash;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex not found")]
    VertexNotFound,

    #[error("edge not found")]
    EdgeNotFound,

    #[error("no path between the requested vertices")]
    NoPath,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A labeled graph over caller-supplied vertex tokens `V` with opaque edge
/// payloads `D`.
///
/// `V` only needs equality, hashing and cloning; the store never inspects
/// its structure. Directedness is fixed at construction: an undirected
/// graph stores every edge in both directions, sharing payload and weight.
#[derive(Debug, Clone)]
pub struct Graph<V, D = ()> {
    directed: bool,
    adj: IndexMap<V, IndexMap<V, EdgeRecord<D>>>,
    edges: IndexMap<(V, V), EdgeRecord<D>>,
}

/// Order-independent equality: same directedness, same adjacency index,
/// same edge table.
impl<V: Eq + Hash, D: PartialEq> PartialEq for Graph<V, D> {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed && self.adj == other.adj && self.edges == other.edges
    }
}

impl<V, D> Graph<V, D> {
    /// Create an empty graph; `directed` is fixed for the graph's lifetime.
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            adj: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of entries in the edge table. Undirected edges count twice,
    /// once per stored direction.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adj.keys()
    }

    /// All edge-table entries as `(source, target, record)`. For undirected
    /// graphs this yields both stored directions; see [`Graph::unique_edges`]
    /// for a mirror-deduplicated pass.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &EdgeRecord<D>)> {
        self.edges.iter().map(|((s, t), record)| (s, t, record))
    }
}

impl<V, D> Graph<V, D>
where
    V: Clone + Eq + Hash,
    D: Clone,
{
    /// Add a vertex. Idempotent: re-adding an existing vertex keeps its
    /// adjacency intact.
    pub fn add_vertex(&mut self, v: V) {
        self.adj.entry(v).or_insert_with(IndexMap::new);
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adj.contains_key(v)
    }

    pub fn contains_edge(&self, s: &V, t: &V) -> bool {
        self.edges.contains_key(&(s.clone(), t.clone()))
    }

    /// Add an edge with the default weight of 1.0. See
    /// [`Graph::add_weighted_edge`].
    pub fn add_edge(&mut self, s: V, t: V, data: D) {
        self.add_weighted_edge(s, t, data, 1.0);
    }

    /// Add an edge from `s` to `t` carrying `data` and `weight`.
    ///
    /// Silently does nothing unless both endpoints are already vertices, or
    /// when `s == t` on an undirected graph (no self-loops there; directed
    /// self-loops are allowed). An existing edge between the pair is
    /// overwritten. On undirected graphs the mirrored entry is written to
    /// both views in the same call.
    pub fn add_weighted_edge(&mut self, s: V, t: V, data: D, weight: f64) {
        if !self.adj.contains_key(&s) || !self.adj.contains_key(&t) {
            return;
        }
        if !self.directed && s == t {
            return;
        }

        let record = EdgeRecord::new(data, weight);
        if !self.directed {
            if let Some(back) = self.adj.get_mut(&t) {
                back.insert(s.clone(), record.clone());
            }
            self.edges
                .insert((t.clone(), s.clone()), record.clone());
        }
        if let Some(forward) = self.adj.get_mut(&s) {
            forward.insert(t.clone(), record.clone());
        }
        self.edges.insert((s, t), record);
    }

    /// Remove a vertex and every edge incident to it, in both directions,
    /// from both views. Does nothing if the vertex is absent.
    pub fn remove_vertex(&mut self, v: &V) {
        if self.adj.shift_remove(v).is_none() {
            return;
        }
        for neighbors in self.adj.values_mut() {
            neighbors.shift_remove(v);
        }
        self.edges.retain(|(s, t), _| s != v && t != v);
    }

    /// Remove the edge from `s` to `t` (and its mirror on undirected
    /// graphs). Does nothing unless both endpoints are vertices.
    pub fn remove_edge(&mut self, s: &V, t: &V) {
        if !self.adj.contains_key(s) || !self.adj.contains_key(t) {
            return;
        }
        if let Some(neighbors) = self.adj.get_mut(s) {
            neighbors.shift_remove(t);
        }
        self.edges.shift_remove(&(s.clone(), t.clone()));
        if !self.directed {
            if let Some(neighbors) = self.adj.get_mut(t) {
                neighbors.shift_remove(s);
            }
            self.edges.shift_remove(&(t.clone(), s.clone()));
        }
    }

    /// Look up the edge from `s` to `t`.
    ///
    /// Signals [`GraphError::VertexNotFound`] when either endpoint is
    /// absent and [`GraphError::EdgeNotFound`] when the pair carries no
    /// edge; missing edges never panic.
    pub fn get_edge(&self, s: &V, t: &V) -> GraphResult<&EdgeRecord<D>> {
        if !self.adj.contains_key(s) || !self.adj.contains_key(t) {
            return Err(GraphError::VertexNotFound);
        }
        self.adj
            .get(s)
            .and_then(|neighbors| neighbors.get(t))
            .ok_or(GraphError::EdgeNotFound)
    }

    /// Neighbors of `v` (outgoing neighbors on directed graphs).
    pub fn adjacency(&self, v: &V) -> GraphResult<Vec<&V>> {
        self.adj
            .get(v)
            .map(|neighbors| neighbors.keys().collect())
            .ok_or(GraphError::VertexNotFound)
    }

    pub fn out_degree(&self, v: &V) -> GraphResult<usize> {
        self.adj
            .get(v)
            .map(IndexMap::len)
            .ok_or(GraphError::VertexNotFound)
    }

    pub fn in_degree(&self, v: &V) -> GraphResult<usize> {
        if !self.adj.contains_key(v) {
            return Err(GraphError::VertexNotFound);
        }
        Ok(self
            .adj
            .values()
            .filter(|neighbors| neighbors.contains_key(v))
            .count())
    }

    /// Degree of `v`.
    ///
    /// Undirected graphs: `degree == out_degree == in_degree`. Directed
    /// graphs: `(out_degree + in_degree) / 2` with integer division — an
    /// unusual legacy convention, preserved for compatibility and pinned
    /// by a test.
    pub fn degree(&self, v: &V) -> GraphResult<usize> {
        let out = self.out_degree(v)?;
        if !self.directed {
            return Ok(out);
        }
        Ok((out + self.in_degree(v)?) / 2)
    }

    /// Edge-table entries visiting each unordered pair once.
    ///
    /// On undirected graphs the mirror of an already-seen edge is skipped;
    /// on directed graphs this is simply every edge. This is the
    /// enumeration Kruskal and persistence run on.
    pub fn unique_edges(&self) -> Vec<(&V, &V, &EdgeRecord<D>)> {
        if self.directed {
            return self.edges().collect();
        }
        let mut seen = rustc_hash::FxHashSet::default();
        let mut unique = Vec::with_capacity(self.edges.len() / 2);
        for (s, t, record) in self.edges() {
            if seen.contains(&(t, s)) {
                continue;
            }
            seen.insert((s, t));
            unique.push((s, t, record));
        }
        unique
    }
}
