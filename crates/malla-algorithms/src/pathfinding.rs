//! Pathfinding algorithms
//!
//! Dijkstra's single-source shortest paths over a [`GraphView`], in a
//! full-tree form and a target-aware form that stops as soon as the target
//! is settled.
//!
//! Precondition: edge weights must be non-negative. The algorithm does not
//! check this; with negative weights the results are unspecified.

use super::common::GraphView;
use super::frontier::Frontier;

/// Shortest-path tree produced by Dijkstra, restricted to the component
/// containing the source.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShortestPathTree {
    pub source: usize,
    /// Predecessor per node; `None` for the source and for unreached nodes.
    pub parent: Vec<Option<usize>>,
    /// Distance from the source per node, `INFINITY` where unreached.
    pub dist: Vec<f64>,
}

impl ShortestPathTree {
    /// True if `node` was reached from the source.
    pub fn reached(&self, node: usize) -> bool {
        self.dist[node].is_finite()
    }

    /// Walk parent pointers from `target` back to the source and reverse.
    ///
    /// Returns `None` when the target was not reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.reached(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.parent[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm: full shortest-path tree from `source`.
pub fn dijkstra(view: &GraphView, source: usize) -> ShortestPathTree {
    dijkstra_inner(view, source, None)
}

/// Dijkstra's algorithm with early termination.
///
/// Stops once `target` is extracted from the frontier; extraction order is
/// by increasing distance, so the target's distance is final at that point.
/// Entries for other unsettled nodes are tentative: use the result only
/// through `path_to(target)` / `dist[target]`.
pub fn dijkstra_to(view: &GraphView, source: usize, target: usize) -> ShortestPathTree {
    dijkstra_inner(view, source, Some(target))
}

fn dijkstra_inner(view: &GraphView, source: usize, target: Option<usize>) -> ShortestPathTree {
    let n = view.node_count;
    let mut dist = vec![f64::INFINITY; n];
    let mut parent = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = Frontier::new(n);

    dist[source] = 0.0;
    frontier.insert_or_decrease(source, 0.0);

    while let Some((v, d)) = frontier.extract_min() {
        debug_assert!(!visited[v]);
        visited[v] = true;
        if target == Some(v) {
            break;
        }

        let weights = view.weights(v);
        for (i, &w) in view.successors(v).iter().enumerate() {
            if visited[w] {
                continue;
            }
            let next = d + weights[i];
            if next < dist[w] {
                dist[w] = next;
                parent[w] = Some(v);
                frontier.insert_or_decrease(w, next);
            }
        }
    }

    ShortestPathTree {
        source,
        parent,
        dist,
    }
}

/// Shortest path from `source` to `target` as `(nodes, cost)`.
///
/// `None` when the target is unreachable.
pub fn shortest_path(view: &GraphView, source: usize, target: usize) -> Option<(Vec<usize>, f64)> {
    let tree = dijkstra_to(view, source, target);
    let path = tree.path_to(target)?;
    Some((path, tree.dist[target]))
}
