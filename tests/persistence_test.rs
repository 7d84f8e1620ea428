use malla::persistence::{from_reader, load_graph, save_graph, to_writer, PersistenceError};
use malla::Graph;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route tracing events into the captured test output, so the persistence
/// debug events show up under `cargo test -- --nocapture`.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn street_graph() -> Graph<String, String> {
    init_tracing();
    let mut g = Graph::undirected();
    for name in ["sol", "gran via", "callao", "opera"] {
        g.add_vertex(name.to_string());
    }
    g.add_weighted_edge(
        "sol".into(),
        "gran via".into(),
        "tramo a".into(),
        0.4,
    );
    g.add_weighted_edge(
        "gran via".into(),
        "callao".into(),
        "tramo b".into(),
        0.2,
    );
    // "opera" stays isolated; the vertex list must still carry it.
    g
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("madrid.json");

    let original = street_graph();
    save_graph(&original, &path).unwrap();
    let restored: Graph<String, String> = load_graph(&path).unwrap();

    assert_eq!(restored, original);
    assert!(restored.contains_vertex(&"opera".to_string()));
    assert_eq!(
        restored
            .get_edge(&"callao".to_string(), &"gran via".to_string())
            .unwrap()
            .data,
        "tramo b"
    );
}

#[test]
fn test_round_trip_directed() {
    init_tracing();
    let mut g: Graph<u32, ()> = Graph::directed();
    for v in 1..=3 {
        g.add_vertex(v);
    }
    g.add_weighted_edge(1, 2, (), 1.5);
    g.add_weighted_edge(2, 1, (), 2.5);
    g.add_weighted_edge(1, 1, (), 3.0);

    let mut buffer = Vec::new();
    to_writer(&g, &mut buffer).unwrap();
    let restored: Graph<u32, ()> = from_reader(buffer.as_slice()).unwrap();

    assert!(restored.is_directed());
    assert_eq!(restored, g);
}

#[test]
fn test_schema_field_names() {
    let mut buffer = Vec::new();
    to_writer(&street_graph(), &mut buffer).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(value["dirigido"], serde_json::json!(false));
    assert_eq!(value["adj"].as_array().unwrap().len(), 4);
    // Mirrors are deduplicated on disk: two unordered pairs.
    assert_eq!(value["aristas"].as_array().unwrap().len(), 2);
}

#[test]
fn test_malformed_json_is_rejected() {
    let result: Result<Graph<u32, ()>, _> = from_reader("{ adj: oops".as_bytes());
    assert!(matches!(
        result,
        Err(PersistenceError::MalformedGraphFile(_))
    ));
}

#[test]
fn test_edge_to_undeclared_vertex_is_rejected() {
    let text = r#"{
        "dirigido": false,
        "adj": [1, 2],
        "aristas": [{"s": 1, "t": 3, "data": null, "weight": 1.0}]
    }"#;
    let result: Result<Graph<u32, ()>, _> = from_reader(text.as_bytes());
    assert!(matches!(
        result,
        Err(PersistenceError::MalformedGraphFile(_))
    ));
}

#[test]
fn test_undirected_self_loop_is_rejected() {
    let text = r#"{
        "dirigido": false,
        "adj": [1],
        "aristas": [{"s": 1, "t": 1, "data": null, "weight": 1.0}]
    }"#;
    let result: Result<Graph<u32, ()>, _> = from_reader(text.as_bytes());
    assert!(matches!(
        result,
        Err(PersistenceError::MalformedGraphFile(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result: Result<Graph<u32, ()>, _> = load_graph(dir.path().join("absent.json"));
    assert!(matches!(result, Err(PersistenceError::Io(_))));
}
