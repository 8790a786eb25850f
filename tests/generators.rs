//! Generator tests: structural properties per family, bound rejections.

use std::collections::{HashMap, HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::SeedableRng;

use graphgen::generate;
use graphgen::graph::{Direction, Graph};
use graphgen::types::GraphError;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Number of logical edges: stored entries, halved for undirected graphs.
fn logical_edges(graph: &Graph) -> usize {
    match graph.direction() {
        Direction::Directed => graph.edge_count(),
        Direction::Undirected => graph.edge_count() / 2,
    }
}

/// Proper 2-coloring check over the undirected view of the stored edges.
fn is_bipartite(graph: &Graph) -> bool {
    let mut neighbors: HashMap<&str, Vec<&str>> = HashMap::new();
    for (label, edges) in graph.vertex_map() {
        for edge in edges {
            neighbors.entry(label.as_str()).or_default().push(&edge.dest);
            neighbors.entry(edge.dest.as_str()).or_default().push(label);
        }
    }

    let mut colors: HashMap<&str, bool> = HashMap::new();
    for start in graph.vertex_map().keys() {
        if colors.contains_key(start.as_str()) {
            continue;
        }
        colors.insert(start, false);
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(start);

        while let Some(label) = queue.pop_front() {
            let color = colors[label];
            for &next in neighbors.get(label).map(Vec::as_slice).unwrap_or(&[]) {
                match colors.get(next) {
                    Some(&c) if c == color => return false,
                    Some(_) => {}
                    None => {
                        colors.insert(next, !color);
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    true
}

// ==================== Simple / Complete Tests ====================

#[test]
fn test_simple_accepts_requested_edge_count() {
    let mut rng = rng(1);
    let graph = generate::simple(&mut rng, 8, 12).unwrap();

    // Every accepted ordered pair is stored; an undirected result also
    // stores mirrors, and a pair accepted in both orders collapses
    let stored = graph.edge_count();
    match graph.direction() {
        Direction::Directed => assert_eq!(stored, 12),
        Direction::Undirected => {
            assert!(stored % 2 == 0);
            assert!(stored >= 12 && stored <= 24);
        }
    }

    for (label, edges) in graph.vertex_map() {
        assert!(label.parse::<usize>().unwrap() < 8);
        let mut dests: Vec<&str> = edges.iter().map(|e| e.dest.as_str()).collect();
        assert!(dests.iter().all(|d| *d != label), "self-loop on {}", label);
        dests.sort();
        dests.dedup();
        assert_eq!(dests.len(), edges.len(), "duplicate pair under {}", label);
    }
}

#[test]
fn test_simple_rejects_too_many_edges() {
    let mut rng = rng(2);
    // 5 vertices hold at most 10 edges
    let result = generate::simple(&mut rng, 5, 11);
    match result.unwrap_err() {
        GraphError::TooManyEdges { requested: 11, max: 10 } => {}
        e => panic!("Expected TooManyEdges, got {:?}", e),
    }
}

#[test]
fn test_simple_rejects_negative_edges() {
    let mut rng = rng(3);
    let result = generate::simple(&mut rng, 5, -1);
    match result.unwrap_err() {
        GraphError::TooFewEdges { requested: -1, .. } => {}
        e => panic!("Expected TooFewEdges, got {:?}", e),
    }
}

#[test]
fn test_simple_zero_vertices_zero_edges() {
    let mut rng = rng(4);
    let graph = generate::simple(&mut rng, 0, 0).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn test_simple_p_rejects_out_of_range_probability() {
    let mut rng = rng(5);
    for p in [-0.1, 1.1, f64::NAN] {
        let result = generate::simple_p(&mut rng, 5, p);
        match result.unwrap_err() {
            GraphError::InvalidProbability(_) => {}
            e => panic!("Expected InvalidProbability, got {:?}", e),
        }
    }
}

#[test]
fn test_simple_p_zero_probability_yields_no_edges() {
    let mut rng = rng(6);
    let graph = generate::simple_p(&mut rng, 6, 0.0).unwrap();
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_complete_connects_every_pair() {
    let mut rng = rng(7);
    let graph = generate::complete(&mut rng, 6).unwrap();

    match graph.direction() {
        // 15 pairs, stored twice when mirrored
        Direction::Undirected => assert_eq!(graph.edge_count(), 30),
        Direction::Directed => assert_eq!(graph.edge_count(), 15),
    }

    for i in 0..6usize {
        for j in (i + 1)..6usize {
            let (src, dest) = (i.to_string(), j.to_string());
            assert!(
                graph.edges_from(&src).iter().any(|e| e.dest == dest),
                "missing pair {}-{}",
                src,
                dest
            );
        }
    }
}

// ==================== Bipartite Tests ====================

#[test]
fn test_bipartite_places_exactly_m_edges() {
    let mut rng = rng(8);
    let graph = generate::bipartite(&mut rng, 4, 5, 9).unwrap();

    assert_eq!(logical_edges(&graph), 9);
    assert!(is_bipartite(&graph));
}

#[test]
fn test_bipartite_rejects_too_many_edges() {
    let mut rng = rng(9);
    let result = generate::bipartite(&mut rng, 3, 4, 13);
    match result.unwrap_err() {
        GraphError::TooManyEdges { requested: 13, max: 12 } => {}
        e => panic!("Expected TooManyEdges, got {:?}", e),
    }
}

#[test]
fn test_bipartite_rejects_negative_edges() {
    let mut rng = rng(10);
    let result = generate::bipartite(&mut rng, 3, 4, -2);
    match result.unwrap_err() {
        GraphError::TooFewEdges { requested: -2, .. } => {}
        e => panic!("Expected TooFewEdges, got {:?}", e),
    }
}

#[test]
fn test_complete_bipartite() {
    let mut rng = rng(11);
    let graph = generate::complete_bipartite(&mut rng, 3, 4).unwrap();

    assert_eq!(logical_edges(&graph), 12);
    assert!(is_bipartite(&graph));
}

#[test]
fn test_bipartite_p_stays_bipartite() {
    let mut rng = rng(12);
    let graph = generate::bipartite_p(&mut rng, 5, 5, 0.7).unwrap();

    assert!(logical_edges(&graph) <= 25);
    assert!(is_bipartite(&graph));
}

#[test]
fn test_bipartite_p_rejects_out_of_range_probability() {
    let mut rng = rng(13);
    let result = generate::bipartite_p(&mut rng, 3, 3, 2.0);
    match result.unwrap_err() {
        GraphError::InvalidProbability(p) => assert!((p - 2.0).abs() < f64::EPSILON),
        e => panic!("Expected InvalidProbability, got {:?}", e),
    }
}

// ==================== Structured Family Tests ====================

#[test]
fn test_path_is_a_connected_chain() {
    let mut rng = rng(14);
    let graph = generate::path(&mut rng, 10);

    assert_eq!(graph.direction(), Direction::Undirected);
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 18); // 9 chain edges stored twice

    // Exactly two endpoints of degree 1, the rest degree 2
    let degrees: Vec<usize> = graph.vertex_map().values().map(Vec::len).collect();
    assert_eq!(degrees.iter().filter(|&&d| d == 1).count(), 2);
    assert_eq!(degrees.iter().filter(|&&d| d == 2).count(), 8);
}

#[test]
fn test_binary_tree_edge_count() {
    let mut rng = rng(15);
    let graph = generate::binary_tree(&mut rng, 15);

    assert_eq!(graph.vertex_count(), 15);
    assert_eq!(graph.edge_count(), 28); // 14 tree edges stored twice
    assert!(is_bipartite(&graph)); // trees are bipartite
}

#[test]
fn test_cycle_every_vertex_has_degree_two() {
    let mut rng = rng(16);
    let graph = generate::cycle(&mut rng, 7);

    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), 14);
    assert!(graph.vertex_map().values().all(|edges| edges.len() == 2));
}

#[test]
fn test_cycle_zero_is_empty() {
    let mut rng = rng(17);
    let graph = generate::cycle(&mut rng, 0);
    assert!(graph.is_empty());
}

#[test]
fn test_wheel_hub_and_rim_degrees() {
    let mut rng = rng(18);
    let graph = generate::wheel(&mut rng, 5).unwrap();

    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 16); // 4 rim + 4 spoke edges stored twice

    let mut degrees: Vec<usize> = graph.vertex_map().values().map(Vec::len).collect();
    degrees.sort_unstable();
    assert_eq!(degrees, [3, 3, 3, 3, 4]);
}

#[test]
fn test_wheel_rejects_single_vertex() {
    let mut rng = rng(19);
    let result = generate::wheel(&mut rng, 1);
    match result.unwrap_err() {
        GraphError::TooFewVertices { required: 2, actual: 1 } => {}
        e => panic!("Expected TooFewVertices, got {:?}", e),
    }
}

#[test]
fn test_star_hub_connects_to_all() {
    let mut rng = rng(20);
    let graph = generate::star(&mut rng, 6).unwrap();

    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 10); // 5 spokes stored twice

    let mut degrees: Vec<usize> = graph.vertex_map().values().map(Vec::len).collect();
    degrees.sort_unstable();
    assert_eq!(degrees, [1, 1, 1, 1, 1, 5]);
}

#[test]
fn test_star_rejects_zero_vertices() {
    let mut rng = rng(21);
    let result = generate::star(&mut rng, 0);
    match result.unwrap_err() {
        GraphError::TooFewVertices { required: 1, actual: 0 } => {}
        e => panic!("Expected TooFewVertices, got {:?}", e),
    }
}

// ==================== Eulerian Walk Tests ====================

#[test]
fn test_eulerian_cycle_labels_stay_in_range() {
    let mut rng = rng(22);
    let graph = generate::eulerian_cycle(&mut rng, 4, 10).unwrap();

    assert_eq!(graph.direction(), Direction::Undirected);
    assert!(graph.vertex_count() <= 4);
    assert!(graph.edge_count() <= 20);
    for label in graph.vertex_map().keys() {
        assert!(label.parse::<usize>().unwrap() < 4);
    }
}

#[test]
fn test_eulerian_cycle_rejects_zero_vertices() {
    let mut rng = rng(23);
    let result = generate::eulerian_cycle(&mut rng, 0, 1);
    match result.unwrap_err() {
        GraphError::TooFewVertices { required: 1, actual: 0 } => {}
        e => panic!("Expected TooFewVertices, got {:?}", e),
    }
}

#[test]
fn test_eulerian_cycle_rejects_zero_edges() {
    let mut rng = rng(24);
    let result = generate::eulerian_cycle(&mut rng, 3, 0);
    match result.unwrap_err() {
        GraphError::TooFewEdges { requested: 0, min: 1 } => {}
        e => panic!("Expected TooFewEdges, got {:?}", e),
    }
}

#[test]
fn test_eulerian_path_zero_edges_is_empty() {
    // A walk of length zero inserts no edges, and vertices only come into
    // existence through edge insertion
    let mut rng = rng(25);
    let graph = generate::eulerian_path(&mut rng, 3, 0).unwrap();

    assert!(graph.is_empty());
}

#[test]
fn test_eulerian_path_rejects_negative_edges() {
    let mut rng = rng(26);
    let result = generate::eulerian_path(&mut rng, 3, -1);
    match result.unwrap_err() {
        GraphError::TooFewEdges { requested: -1, min: 0 } => {}
        e => panic!("Expected TooFewEdges, got {:?}", e),
    }
}

// ==================== Regular Graph Tests ====================

#[test]
fn test_regular_rejects_odd_degree_sum() {
    let mut rng = rng(27);
    let result = generate::regular(&mut rng, 3, 3);
    match result.unwrap_err() {
        GraphError::OddDegreeSum { vertices: 3, degree: 3 } => {}
        e => panic!("Expected OddDegreeSum, got {:?}", e),
    }
}

#[test]
fn test_regular_degree_sum_within_caveat() {
    let mut rng = rng(28);
    let graph = generate::regular(&mut rng, 10, 4).unwrap();

    // Matching collisions may collapse, so the stored total can fall short
    // of n*k but never exceed it
    assert!(graph.edge_count() <= 40);
    assert!(graph.edge_count() % 2 == 0);
    for label in graph.vertex_map().keys() {
        assert!(label.parse::<usize>().unwrap() < 10);
    }
}

#[test]
fn test_regular_zero_degree() {
    let mut rng = rng(29);
    let graph = generate::regular(&mut rng, 4, 0).unwrap();
    assert!(graph.is_empty());
}

// ==================== Helper Tests ====================

#[test]
fn test_shuffled_labels_is_a_permutation() {
    let mut rng = rng(30);
    let labels = generate::shuffled_labels(&mut rng, 20);

    assert_eq!(labels.len(), 20);
    let unique: HashSet<usize> = labels.iter().map(|l| l.parse().unwrap()).collect();
    assert_eq!(unique.len(), 20);
    assert!(unique.iter().all(|&v| v < 20));
}

#[test]
fn test_random_weight_truncated_to_two_decimals() {
    let mut rng = rng(31);
    for _ in 0..100 {
        let w = generate::random_weight(&mut rng);
        assert!((0.0..1.0).contains(&w));
        assert!(((w * 100.0).round() - w * 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_bernoulli_extremes() {
    let mut rng = rng(32);
    for _ in 0..50 {
        assert!(!generate::bernoulli(&mut rng, 0.0));
        assert!(generate::bernoulli(&mut rng, 1.0));
    }
}

#[test]
fn test_random_graph_is_empty() {
    let mut rng = rng(33);
    let graph = generate::random_graph(&mut rng);
    assert!(graph.is_empty());
}

#[test]
fn test_seeded_generation_is_deterministic() {
    let a = generate::wheel(&mut rng(99), 8).unwrap();
    let b = generate::wheel(&mut rng(99), 8).unwrap();

    assert_eq!(a.to_string(), b.to_string());
}
