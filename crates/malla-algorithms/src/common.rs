//! Shared read-only topology view consumed by every algorithm.
//!
//! Uses Compressed Sparse Row (CSR) layout: one contiguous target array per
//! direction, sliced by per-node offsets. Weights are aligned with
//! `out_targets` (every edge carries a weight; unweighted callers pass 1.0).

/// A dense, integer-indexed snapshot of a graph's topology.
///
/// Nodes are `0..node_count`. Undirected graphs are represented by storing
/// both directions of every edge.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,
    /// Edge weights, aligned with `out_targets`
    pub out_weights: Vec<f64>,
}

impl GraphView {
    /// Build a view from an edge list `(source, target, weight)`.
    ///
    /// Indices must be `< node_count`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut out_offsets = vec![0usize; node_count + 1];
        let mut in_offsets = vec![0usize; node_count + 1];

        for &(s, t, _) in edges {
            out_offsets[s + 1] += 1;
            in_offsets[t + 1] += 1;
        }
        for i in 0..node_count {
            out_offsets[i + 1] += out_offsets[i];
            in_offsets[i + 1] += in_offsets[i];
        }

        let mut out_targets = vec![0usize; edges.len()];
        let mut out_weights = vec![0f64; edges.len()];
        let mut in_sources = vec![0usize; edges.len()];
        let mut out_cursor = out_offsets.clone();
        let mut in_cursor = in_offsets.clone();

        for &(s, t, w) in edges {
            out_targets[out_cursor[s]] = t;
            out_weights[out_cursor[s]] = w;
            out_cursor[s] += 1;
            in_sources[in_cursor[t]] = s;
            in_cursor[t] += 1;
        }

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            out_weights,
        }
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.out_targets[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        &self.in_sources[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Get weights for outgoing edges of a node, aligned with `successors`
    pub fn weights(&self, idx: usize) -> &[f64] {
        &self.out_weights[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }
}
