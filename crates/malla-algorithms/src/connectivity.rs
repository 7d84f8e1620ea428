//! Connectivity queries
//!
//! Connected components via union-find over the edge set, ignoring edge
//! direction (weak connectivity). Strong connectivity for directed graphs
//! is out of scope.

use super::common::GraphView;
use super::dsu::DisjointSet;

/// Component assignment per node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Components {
    /// Component id per node (the union-find root's index).
    pub component: Vec<usize>,
    /// Number of distinct components.
    pub count: usize,
}

/// Partition the nodes into connected components, ignoring direction.
pub fn connected_components(view: &GraphView) -> Components {
    let n = view.node_count;
    let mut dsu = DisjointSet::new(n);

    for u in 0..n {
        for &v in view.successors(u) {
            dsu.union(u, v);
        }
    }

    let component = (0..n).map(|i| dsu.find(i)).collect();
    Components {
        component,
        count: dsu.set_count(),
    }
}

/// True iff every node is reachable from every other, ignoring direction.
///
/// The empty graph counts as connected.
pub fn is_connected(view: &GraphView) -> bool {
    view.node_count <= 1 || connected_components(view).count == 1
}
