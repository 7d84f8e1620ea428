//! Mutable labeled graph: adjacency index plus a parallel edge table.

pub mod edge;
pub mod store;

pub use edge::EdgeRecord;
pub use store::{Graph, GraphError, GraphResult};
