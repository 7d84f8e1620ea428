//! Graph algorithms over the store
//!
//! Algorithms live in the `malla-algorithms` crate and work on dense index
//! views; this module is the integration layer. It builds a [`GraphView`]
//! snapshot from a [`Graph`], translates vertex tokens to dense indices and
//! maps results back. Algorithm entry points take `&self`, so they never
//! mutate the store.

use crate::graph::{Graph, GraphError, GraphResult};
use malla_algorithms::{connectivity, mst, pathfinding, GraphView};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

// Re-export the index-based layer for callers that want to run on a view
// directly (e.g. repeated queries against one snapshot).
pub use malla_algorithms::{
    connected_components, Components, DisjointSet, Frontier, MstForest, MstTree,
    ShortestPathTree,
};

/// Dense snapshot of a graph plus the token/index mapping both ways.
pub struct ViewMap<'g, V> {
    pub view: GraphView,
    pub index_to_vertex: Vec<&'g V>,
    pub vertex_to_index: FxHashMap<&'g V, usize>,
}

impl<'g, V: Eq + Hash> ViewMap<'g, V> {
    fn index_of(&self, v: &V) -> GraphResult<usize> {
        self.vertex_to_index
            .get(v)
            .copied()
            .ok_or(GraphError::VertexNotFound)
    }
}

/// Build a [`ViewMap`] from the store for algorithm execution.
///
/// Dense indices follow the adjacency index's insertion order, so index 0
/// is always the first vertex added — the deterministic default start for
/// Prim. The edge table is walked as-is: undirected graphs already store
/// both directions, which is exactly what the traversal algorithms expect.
pub fn build_view<V, D>(graph: &Graph<V, D>) -> ViewMap<'_, V>
where
    V: Clone + Eq + Hash,
    D: Clone,
{
    let index_to_vertex: Vec<&V> = graph.vertices().collect();
    let mut vertex_to_index =
        FxHashMap::with_capacity_and_hasher(index_to_vertex.len(), Default::default());
    for (idx, &v) in index_to_vertex.iter().enumerate() {
        vertex_to_index.insert(v, idx);
    }

    let mut edges = Vec::with_capacity(graph.edge_count());
    for (s, t, record) in graph.edges() {
        edges.push((vertex_to_index[s], vertex_to_index[t], record.weight));
    }

    debug!(
        vertices = index_to_vertex.len(),
        edges = edges.len(),
        "built dense graph view"
    );

    ViewMap {
        view: GraphView::from_edges(index_to_vertex.len(), &edges),
        index_to_vertex,
        vertex_to_index,
    }
}

impl<V, D> Graph<V, D>
where
    V: Clone + Eq + Hash,
    D: Clone,
{
    /// Dijkstra's single-source shortest-path tree from `source`.
    ///
    /// Returns a parent map for every vertex reachable from `source`
    /// (restricted to its connected component); the source maps to `None`.
    ///
    /// Precondition: all edge weights are non-negative. This is not
    /// checked; with negative weights the result is unspecified.
    pub fn dijkstra(&self, source: &V) -> GraphResult<HashMap<V, Option<V>>> {
        let map = build_view(self);
        let source_idx = map.index_of(source)?;
        let tree = pathfinding::dijkstra(&map.view, source_idx);
        Ok(parent_map(&map, &tree.parent, |idx| tree.reached(idx)))
    }

    /// Shortest path from `source` to `target` by Dijkstra with early
    /// termination, as the sequence of vertices including both endpoints.
    ///
    /// Signals [`GraphError::NoPath`] when the target is unreachable and
    /// [`GraphError::VertexNotFound`] when either endpoint is absent.
    pub fn shortest_path(&self, source: &V, target: &V) -> GraphResult<Vec<V>> {
        let map = build_view(self);
        let source_idx = map.index_of(source)?;
        let target_idx = map.index_of(target)?;
        let tree = pathfinding::dijkstra_to(&map.view, source_idx, target_idx);
        let path = tree.path_to(target_idx).ok_or(GraphError::NoPath)?;
        Ok(path
            .into_iter()
            .map(|idx| map.index_to_vertex[idx].clone())
            .collect())
    }

    /// Prim's minimum spanning tree.
    ///
    /// `start` picks the vertex to grow from; `None` uses the first vertex
    /// in insertion order, keeping results reproducible. The parent map
    /// covers the start vertex's component only — on a disconnected graph
    /// the result is partial, and callers wanting a forest must run once
    /// per component (or use [`Graph::kruskal`]).
    pub fn prim(&self, start: Option<&V>) -> GraphResult<HashMap<V, Option<V>>> {
        if self.vertex_count() == 0 {
            return Ok(HashMap::new());
        }
        let map = build_view(self);
        let start_idx = match start {
            Some(v) => map.index_of(v)?,
            None => 0,
        };
        let tree = mst::prim(&map.view, start_idx);
        Ok(parent_map(&map, &tree.parent, |idx| tree.covered(idx)))
    }

    /// Kruskal's minimum spanning tree (forest on disconnected graphs).
    ///
    /// Iterates each unordered pair of the edge table once, in ascending
    /// weight order, accepting edges whose endpoints union-find into
    /// different sets. Returns the accepted `(source, target)` pairs.
    pub fn kruskal(&self) -> Vec<(V, V)> {
        let map = build_view(self);
        let edges: Vec<(usize, usize, f64)> = self
            .unique_edges()
            .into_iter()
            .map(|(s, t, record)| (map.vertex_to_index[s], map.vertex_to_index[t], record.weight))
            .collect();
        let forest = mst::kruskal(map.view.node_count, &edges);
        forest
            .edges
            .into_iter()
            .map(|(u, v, _)| {
                (
                    map.index_to_vertex[u].clone(),
                    map.index_to_vertex[v].clone(),
                )
            })
            .collect()
    }

    /// True iff one reachability pass from an arbitrary vertex reaches
    /// every vertex, ignoring edge direction. The empty graph counts as
    /// connected. Directed strong connectivity is out of scope.
    pub fn is_connected(&self) -> bool {
        if self.vertex_count() == 0 {
            return true;
        }
        connectivity::is_connected(&build_view(self).view)
    }
}

fn parent_map<V: Clone + Eq + Hash>(
    map: &ViewMap<'_, V>,
    parent: &[Option<usize>],
    included: impl Fn(usize) -> bool,
) -> HashMap<V, Option<V>> {
    let mut result = HashMap::new();
    for (idx, &vertex) in map.index_to_vertex.iter().enumerate() {
        if included(idx) {
            result.insert(
                vertex.clone(),
                parent[idx].map(|p| map.index_to_vertex[p].clone()),
            );
        }
    }
    result
}
