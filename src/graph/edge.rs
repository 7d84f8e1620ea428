//! Edge records stored in the adjacency index and the edge table.

use serde::{Deserialize, Serialize};

/// Payload and weight attached to one directed adjacency entry.
///
/// For undirected graphs the mirrored entry carries a clone of the same
/// payload and the same weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<D> {
    /// Caller-supplied payload; the engine never inspects it.
    pub data: D,
    /// Edge weight, 1.0 for unweighted edges.
    pub weight: f64,
}

impl<D> EdgeRecord<D> {
    pub fn new(data: D, weight: f64) -> Self {
        EdgeRecord { data, weight }
    }
}
