//! Index-based graph algorithms for the malla graph ADT.
//!
//! Every algorithm here works on a [`GraphView`]: a dense, read-only CSR
//! snapshot of the topology where vertices are `0..node_count`. Mapping
//! between caller vertex tokens and dense indices is the embedding crate's
//! job; this crate stays free of store types and heavy dependencies.

pub mod common;
pub mod connectivity;
pub mod dsu;
pub mod frontier;
pub mod mst;
pub mod pathfinding;

pub use common::GraphView;
pub use connectivity::{connected_components, is_connected, Components};
pub use dsu::DisjointSet;
pub use frontier::Frontier;
pub use mst::{kruskal, prim, MstForest, MstTree};
pub use pathfinding::{dijkstra, dijkstra_to, shortest_path, ShortestPathTree};
