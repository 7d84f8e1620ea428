use malla::{Graph, GraphError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route tracing events into the captured test output, so the view-building
/// debug events show up under `cargo test -- --nocapture`.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn triangle() -> Graph<u32, ()> {
    init_tracing();
    // 1-2 (1), 2-3 (1), 1-3 (5)
    let mut g = Graph::undirected();
    for v in 1..=3 {
        g.add_vertex(v);
    }
    g.add_weighted_edge(1, 2, (), 1.0);
    g.add_weighted_edge(2, 3, (), 1.0);
    g.add_weighted_edge(1, 3, (), 5.0);
    g
}

#[test]
fn test_dijkstra_parent_map_on_triangle() {
    let g = triangle();
    let parents = g.dijkstra(&1).unwrap();

    let mut expected = HashMap::new();
    expected.insert(1, None);
    expected.insert(2, Some(1));
    expected.insert(3, Some(2));
    assert_eq!(parents, expected);
}

#[test]
fn test_shortest_path_takes_two_hops() {
    let g = triangle();
    assert_eq!(g.shortest_path(&1, &3).unwrap(), vec![1, 2, 3]);
    assert_eq!(g.shortest_path(&3, &1).unwrap(), vec![3, 2, 1]);
}

#[test]
fn test_dijkstra_restricted_to_source_component() {
    let mut g = triangle();
    g.add_vertex(4);
    g.add_vertex(5);
    g.add_weighted_edge(4, 5, (), 1.0);

    let parents = g.dijkstra(&1).unwrap();
    assert_eq!(parents.len(), 3);
    assert!(!parents.contains_key(&4));
}

#[test]
fn test_unreachable_target_signals_no_path() {
    let mut g = triangle();
    g.add_vertex(4);
    assert_eq!(g.shortest_path(&1, &4), Err(GraphError::NoPath));
}

#[test]
fn test_absent_vertices_signal_not_found() {
    let g = triangle();
    assert_eq!(g.dijkstra(&9), Err(GraphError::VertexNotFound));
    assert_eq!(g.shortest_path(&1, &9), Err(GraphError::VertexNotFound));
    assert_eq!(g.prim(Some(&9)), Err(GraphError::VertexNotFound));
}

#[test]
fn test_directed_shortest_path_respects_direction() {
    let mut g: Graph<u32, ()> = Graph::directed();
    for v in 1..=3 {
        g.add_vertex(v);
    }
    g.add_weighted_edge(1, 2, (), 1.0);
    g.add_weighted_edge(2, 3, (), 1.0);

    assert_eq!(g.shortest_path(&1, &3).unwrap(), vec![1, 2, 3]);
    assert_eq!(g.shortest_path(&3, &1), Err(GraphError::NoPath));
}

/// Total weight of a spanning edge set, read back from the store.
fn spanning_weight(g: &Graph<u32, ()>, edges: &[(u32, u32)]) -> f64 {
    edges
        .iter()
        .map(|(s, t)| g.get_edge(s, t).unwrap().weight)
        .sum()
}

/// Total weight of a Prim parent map, read back from the store.
fn tree_weight(g: &Graph<u32, ()>, parents: &HashMap<u32, Option<u32>>) -> f64 {
    parents
        .iter()
        .filter_map(|(v, p)| p.as_ref().map(|p| g.get_edge(p, v).unwrap().weight))
        .sum()
}

#[test]
fn test_prim_and_kruskal_agree_on_triangle() {
    let g = triangle();

    let kruskal = g.kruskal();
    assert_eq!(kruskal.len(), 2);
    assert_eq!(spanning_weight(&g, &kruskal), 2.0);

    let prim = g.prim(None).unwrap();
    assert_eq!(prim.len(), 3);
    assert_eq!(tree_weight(&g, &prim), 2.0);
}

#[test]
fn test_prim_and_kruskal_agree_on_random_weights() {
    // Seeded so the run is reproducible; weights come from a small integer
    // range so equal-weight ties are common.
    let mut rng = StdRng::seed_from_u64(42);
    let edges = [(1, 2), (1, 3), (1, 4), (1, 5), (2, 4), (3, 4), (3, 5), (5, 6)];

    for _ in 0..20 {
        let mut g: Graph<u32, ()> = Graph::undirected();
        for v in 1..=6 {
            g.add_vertex(v);
        }
        for &(s, t) in &edges {
            g.add_weighted_edge(s, t, (), rng.gen_range(1..12) as f64);
        }

        let kruskal = g.kruskal();
        let prim = g.prim(None).unwrap();

        // Spanning trees: n-1 edges, all vertices covered.
        assert_eq!(kruskal.len(), 5);
        assert_eq!(prim.len(), 6);
        let covered: HashSet<u32> = kruskal.iter().flat_map(|&(s, t)| [s, t]).collect();
        assert_eq!(covered.len(), 6);

        // Same total weight even when tie-broken edge sets differ.
        assert_eq!(spanning_weight(&g, &kruskal), tree_weight(&g, &prim));
    }
}

#[test]
fn test_kruskal_is_acyclic() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut g: Graph<u32, ()> = Graph::undirected();
    for v in 0..10 {
        g.add_vertex(v);
    }
    // Dense graph: every pair gets an edge.
    for s in 0..10u32 {
        for t in (s + 1)..10 {
            g.add_weighted_edge(s, t, (), rng.gen_range(1..100) as f64);
        }
    }

    let mst = g.kruskal();
    assert_eq!(mst.len(), 9);

    // n-1 edges over n distinct vertices with no duplicates is a tree; a
    // repeat of an unordered pair would make a cycle.
    let mut pairs = HashSet::new();
    for &(s, t) in &mst {
        assert!(pairs.insert((s.min(t), s.max(t))));
    }
}

#[test]
fn test_prim_on_disconnected_graph_is_partial() {
    let mut g = triangle();
    g.add_vertex(10);
    g.add_vertex(11);
    g.add_weighted_edge(10, 11, (), 1.0);

    let from_first = g.prim(None).unwrap();
    assert_eq!(from_first.len(), 3);

    let from_island = g.prim(Some(&10)).unwrap();
    assert_eq!(from_island.len(), 2);
    assert_eq!(from_island[&10], None);
    assert_eq!(from_island[&11], Some(10));
}

#[test]
fn test_kruskal_on_disconnected_graph_returns_forest() {
    let mut g = triangle();
    g.add_vertex(10);
    g.add_vertex(11);
    g.add_weighted_edge(10, 11, (), 1.0);

    // 5 vertices, 2 components -> 3 forest edges; must terminate even
    // though n-1 = 4 edges can never be reached.
    let forest = g.kruskal();
    assert_eq!(forest.len(), 3);
}

#[test]
fn test_empty_and_singleton_graphs() {
    let empty: Graph<u32, ()> = Graph::undirected();
    assert!(empty.is_connected());
    assert!(empty.kruskal().is_empty());
    assert!(empty.prim(None).unwrap().is_empty());

    let mut single: Graph<u32, ()> = Graph::undirected();
    single.add_vertex(1);
    assert!(single.is_connected());
    assert!(single.kruskal().is_empty());
    assert_eq!(single.prim(None).unwrap().len(), 1);
}
