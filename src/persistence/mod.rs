//! Persistence layer for the graph store
//!
//! The on-disk schema has three named fields, kept for compatibility with
//! collaborators that consume graph files: `adj` (the vertex list, covering
//! isolated vertices), `aristas` (the edge table as `{s, t, data, weight}`
//! records, one per unordered pair) and `dirigido` (the directedness flag).
//! It is written as JSON via serde and parsed back structurally, never
//! evaluated as code. Malformed input fails with
//! [`PersistenceError::MalformedGraphFile`]; there are no partial loads.

use crate::graph::Graph;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::hash::Hash;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while saving or loading a graph
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph file: {0}")]
    MalformedGraphFile(String),
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::MalformedGraphFile(err.to_string())
    }
}

#[derive(Serialize, Deserialize)]
struct GraphFile<V, D> {
    dirigido: bool,
    adj: Vec<V>,
    aristas: Vec<EdgeEntry<V, D>>,
}

#[derive(Serialize, Deserialize)]
struct EdgeEntry<V, D> {
    s: V,
    t: V,
    data: D,
    weight: f64,
}

/// Serialize `graph` into `writer` using the `adj`/`aristas`/`dirigido`
/// schema.
pub fn to_writer<V, D, W>(graph: &Graph<V, D>, writer: W) -> Result<(), PersistenceError>
where
    V: Serialize + Clone + Eq + Hash,
    D: Serialize + Clone,
    W: Write,
{
    let file = GraphFile {
        dirigido: graph.is_directed(),
        adj: graph.vertices().cloned().collect(),
        aristas: graph
            .unique_edges()
            .into_iter()
            .map(|(s, t, record)| EdgeEntry {
                s: s.clone(),
                t: t.clone(),
                data: record.data.clone(),
                weight: record.weight,
            })
            .collect(),
    };
    debug!(
        vertices = file.adj.len(),
        edges = file.aristas.len(),
        "serializing graph"
    );
    serde_json::to_writer_pretty(writer, &file)?;
    Ok(())
}

/// Parse a graph from `reader`.
///
/// The graph is rebuilt through the normal mutation path, so both views
/// come out consistent (mirrors included for undirected graphs). Records
/// that reference a vertex missing from `adj`, or an undirected self-loop,
/// are rejected as malformed rather than silently dropped.
pub fn from_reader<V, D, R>(reader: R) -> Result<Graph<V, D>, PersistenceError>
where
    V: DeserializeOwned + Clone + Eq + Hash,
    D: DeserializeOwned + Clone,
    R: Read,
{
    let file: GraphFile<V, D> = serde_json::from_reader(reader)?;
    let mut graph = Graph::new(file.dirigido);
    for v in file.adj {
        graph.add_vertex(v);
    }
    for entry in file.aristas {
        if !graph.contains_vertex(&entry.s) || !graph.contains_vertex(&entry.t) {
            return Err(PersistenceError::MalformedGraphFile(
                "edge references a vertex missing from adj".to_string(),
            ));
        }
        if !graph.is_directed() && entry.s == entry.t {
            return Err(PersistenceError::MalformedGraphFile(
                "self-loop in an undirected graph".to_string(),
            ));
        }
        graph.add_weighted_edge(entry.s, entry.t, entry.data, entry.weight);
    }
    Ok(graph)
}

/// Save `graph` to a file at `path`.
pub fn save_graph<V, D>(graph: &Graph<V, D>, path: impl AsRef<Path>) -> Result<(), PersistenceError>
where
    V: Serialize + Clone + Eq + Hash,
    D: Serialize + Clone,
{
    let file = File::create(path.as_ref())?;
    to_writer(graph, BufWriter::new(file))
}

/// Load a graph from the file at `path`.
pub fn load_graph<V, D>(path: impl AsRef<Path>) -> Result<Graph<V, D>, PersistenceError>
where
    V: DeserializeOwned + Clone + Eq + Hash,
    D: DeserializeOwned + Clone,
{
    let file = File::open(path.as_ref())?;
    from_reader(BufReader::new(file))
}
