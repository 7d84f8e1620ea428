//! Minimum Spanning Tree algorithms
//!
//! Prim (frontier expansion from a start node) and Kruskal (edge sort plus
//! union-find). Both expect an undirected topology: the view must contain
//! each edge in both directions for Prim, while Kruskal takes a
//! mirror-deduplicated edge list.

use super::common::GraphView;
use super::dsu::DisjointSet;
use super::frontier::Frontier;
use std::cmp::Ordering;

/// Spanning tree grown by Prim, covering only the start node's component.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MstTree {
    pub start: usize,
    /// Predecessor per node; `None` for the start and for uncovered nodes.
    pub parent: Vec<Option<usize>>,
    /// Accepted edges as `(parent, child, weight)`.
    pub edges: Vec<(usize, usize, f64)>,
    pub total_weight: f64,
}

impl MstTree {
    /// True if `node` belongs to the spanned component.
    pub fn covered(&self, node: usize) -> bool {
        node == self.start || self.parent[node].is_some()
    }
}

/// Spanning forest assembled by Kruskal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MstForest {
    /// Accepted edges as `(source, target, weight)`, ascending by weight.
    pub edges: Vec<(usize, usize, f64)>,
    pub total_weight: f64,
}

/// Prim's algorithm from an explicit start node.
///
/// The frontier tracks, per unvisited node, the cheapest known edge
/// connecting it to the tree. On a disconnected graph the result covers the
/// start node's component only; run once per component for a full forest.
pub fn prim(view: &GraphView, start: usize) -> MstTree {
    let n = view.node_count;
    let mut parent = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = Frontier::new(n);
    let mut edges = Vec::new();
    let mut total_weight = 0.0;

    frontier.insert_or_decrease(start, 0.0);

    while let Some((v, weight)) = frontier.extract_min() {
        debug_assert!(!visited[v]);
        visited[v] = true;
        if let Some(p) = parent[v] {
            edges.push((p, v, weight));
            total_weight += weight;
        }

        let weights = view.weights(v);
        for (i, &u) in view.successors(v).iter().enumerate() {
            if !visited[u] && frontier.insert_or_decrease(u, weights[i]) {
                parent[u] = Some(v);
            }
        }
    }

    MstTree {
        start,
        parent,
        edges,
        total_weight,
    }
}

/// Kruskal's algorithm over a mirror-deduplicated edge list.
///
/// Edges are scanned in ascending weight order and accepted whenever their
/// endpoints are in different union-find sets. The scan stops at `n - 1`
/// accepted edges or when the list runs out, whichever comes first, so a
/// disconnected input yields a spanning forest instead of looping.
pub fn kruskal(node_count: usize, edges: &[(usize, usize, f64)]) -> MstForest {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| {
        edges[a]
            .2
            .partial_cmp(&edges[b].2)
            .unwrap_or(Ordering::Equal)
    });

    let mut dsu = DisjointSet::new(node_count);
    let mut accepted = Vec::new();
    let mut total_weight = 0.0;

    for &i in &order {
        if node_count > 0 && accepted.len() == node_count - 1 {
            break;
        }
        let (u, v, w) = edges[i];
        if dsu.union(u, v) {
            accepted.push((u, v, w));
            total_weight += w;
        }
    }

    MstForest {
        edges: accepted,
        total_weight,
    }
}
