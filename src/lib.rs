//! Malla: a labeled graph ADT with shortest-path and spanning-tree
//! algorithms.
//!
//! The store keeps two coupled views of the edge set — an adjacency index
//! for traversal and a flat edge table for whole-graph enumeration — over
//! caller-supplied vertex tokens (any `Clone + Eq + Hash` type) and opaque
//! edge payloads. On top of it sit Dijkstra single-source shortest paths,
//! Prim and Kruskal minimum spanning trees, connectivity queries and a
//! structured JSON persistence format.
//!
//! # Example
//!
//! ```rust
//! use malla::Graph;
//!
//! let mut g: Graph<u32, ()> = Graph::undirected();
//! for v in 1..=3 {
//!     g.add_vertex(v);
//! }
//! g.add_weighted_edge(1, 2, (), 1.0);
//! g.add_weighted_edge(2, 3, (), 1.0);
//! g.add_weighted_edge(1, 3, (), 5.0);
//!
//! // The two-hop route is cheaper than the direct edge.
//! assert_eq!(g.shortest_path(&1, &3).unwrap(), vec![1, 2, 3]);
//!
//! // Spanning trees by both algorithms agree on total weight.
//! let mst = g.kruskal();
//! assert_eq!(mst.len(), 2);
//! assert!(g.is_connected());
//! ```

pub mod algo;
pub mod graph;
pub mod persistence;

pub use graph::{EdgeRecord, Graph, GraphError, GraphResult};
pub use persistence::{load_graph, save_graph, PersistenceError};
