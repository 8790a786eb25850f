//! Graph generators for specific topological families.
//!
//! Families available:
//! - complete — the maximum number of edges
//! - simple — exact edge count, or per-pair inclusion probability
//! - bipartite / complete bipartite
//! - path
//! - binary tree
//! - cycle
//! - Eulerian cycle / Eulerian path (random walks)
//! - wheel
//! - star
//! - regular (random matching)
//!
//! Every generator takes an explicit random source so runs are seedable, and
//! validates its bounds before consuming any randomness. Edge-count
//! parameters are signed so out-of-range requests (including negative ones)
//! are rejected instead of being unrepresentable.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::{Direction, Graph, GraphFactory};
use crate::types::{GraphError, GraphResult};

/// The maximum number of edges a simple graph on `n` vertices can hold.
fn max_simple_edges(vertex_count: usize) -> i64 {
    let n = vertex_count as i64;

    n * (n - 1) / 2
}

/// Random simple graph with exactly `edge_count` edges.
///
/// Samples uniformly random ordered pairs of distinct labels in
/// [0, vertex_count), rejecting duplicates by (src, dest) pair, until
/// `edge_count` edges have been accepted. Rejection sampling: expect slow
/// runs as `edge_count` approaches the maximum.
pub fn simple<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    edge_count: i64,
) -> GraphResult<Graph> {
    let max = max_simple_edges(vertex_count);

    if edge_count > max {
        return Err(GraphError::TooManyEdges {
            requested: edge_count,
            max,
        });
    }

    if edge_count < 0 {
        return Err(GraphError::TooFewEdges {
            requested: edge_count,
            min: 0,
        });
    }

    let mut graph = random_graph(rng);
    let mut accepted: HashSet<(String, String)> = HashSet::new();

    while accepted.len() < edge_count as usize {
        let src = rng.gen_range(0..vertex_count).to_string();
        let dest = rng.gen_range(0..vertex_count).to_string();

        if src == dest || accepted.contains(&(src.clone(), dest.clone())) {
            continue;
        }

        graph.add_edge(&src, &dest, random_weight(rng));
        accepted.insert((src, dest));
    }

    Ok(graph)
}

/// Random simple graph where each unordered pair (i < j) is included
/// independently with probability `p`.
pub fn simple_p<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize, p: f64) -> GraphResult<Graph> {
    check_probability(p)?;

    let mut graph = random_graph(rng);

    for src in 0..vertex_count {
        for dest in (src + 1)..vertex_count {
            if bernoulli(rng, p) {
                graph.add_edge(&src.to_string(), &dest.to_string(), random_weight(rng));
            }
        }
    }

    Ok(graph)
}

/// Complete graph on `vertex_count` vertices.
pub fn complete<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> GraphResult<Graph> {
    simple_p(rng, vertex_count, 1.0)
}

/// Random bipartite graph with exactly `edge_count` cross-partition edges.
///
/// The two partitions are the first `left_count` and the remaining
/// `right_count` entries of a shuffled label permutation. Cross pairs are
/// rejection-sampled until `edge_count` distinct edges are accepted, so
/// exactly `edge_count` edges are placed whichever direction the underlying
/// graph gets.
pub fn bipartite<R: Rng + ?Sized>(
    rng: &mut R,
    left_count: usize,
    right_count: usize,
    edge_count: i64,
) -> GraphResult<Graph> {
    let max = left_count as i64 * right_count as i64;

    if edge_count > max {
        return Err(GraphError::TooManyEdges {
            requested: edge_count,
            max,
        });
    }

    if edge_count < 0 {
        return Err(GraphError::TooFewEdges {
            requested: edge_count,
            min: 0,
        });
    }

    let mut graph = random_graph(rng);
    let labels = shuffled_labels(rng, left_count + right_count);
    let mut accepted: HashSet<(String, String)> = HashSet::new();

    while accepted.len() < edge_count as usize {
        let src = labels[rng.gen_range(0..left_count)].clone();
        let dest = labels[left_count + rng.gen_range(0..right_count)].clone();

        if accepted.contains(&(src.clone(), dest.clone())) {
            continue;
        }

        graph.add_edge(&src, &dest, random_weight(rng));
        accepted.insert((src, dest));
    }

    Ok(graph)
}

/// Complete bipartite graph: every cross-partition pair connected.
pub fn complete_bipartite<R: Rng + ?Sized>(
    rng: &mut R,
    left_count: usize,
    right_count: usize,
) -> GraphResult<Graph> {
    bipartite(
        rng,
        left_count,
        right_count,
        left_count as i64 * right_count as i64,
    )
}

/// Random bipartite graph where each cross-partition pair is included
/// independently with probability `p`.
pub fn bipartite_p<R: Rng + ?Sized>(
    rng: &mut R,
    left_count: usize,
    right_count: usize,
    p: f64,
) -> GraphResult<Graph> {
    check_probability(p)?;

    let mut graph = random_graph(rng);
    let labels = shuffled_labels(rng, left_count + right_count);

    for i in 0..left_count {
        for j in 0..right_count {
            if bernoulli(rng, p) {
                graph.add_edge(&labels[i], &labels[left_count + j], random_weight(rng));
            }
        }
    }

    Ok(graph)
}

/// Undirected chain: vertex i connects to vertex i+1 over a shuffled label
/// permutation.
pub fn path<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> Graph {
    let mut graph = GraphFactory::create(Direction::Undirected);
    let labels = shuffled_labels(rng, vertex_count);

    for pair in labels.windows(2) {
        graph.add_edge(&pair[0], &pair[1], random_weight(rng));
    }

    graph
}

/// Undirected complete binary tree: vertex i (i >= 1) connects to vertex
/// (i-1)/2 over a shuffled label permutation.
pub fn binary_tree<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> Graph {
    let mut graph = GraphFactory::create(Direction::Undirected);
    let labels = shuffled_labels(rng, vertex_count);

    for i in 1..vertex_count {
        graph.add_edge(&labels[i], &labels[(i - 1) / 2], random_weight(rng));
    }

    graph
}

/// Undirected ring: a chain plus a closing edge from the last label back to
/// the first. `cycle(0)` is the empty graph.
pub fn cycle<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> Graph {
    let mut graph = GraphFactory::create(Direction::Undirected);
    let labels = shuffled_labels(rng, vertex_count);

    for pair in labels.windows(2) {
        graph.add_edge(&pair[0], &pair[1], random_weight(rng));
    }

    if let (Some(last), Some(first)) = (labels.last(), labels.first()) {
        graph.add_edge(last, first, random_weight(rng));
    }

    graph
}

/// Random closed walk of length `edge_count` over labels drawn uniformly
/// from [0, vertex_count).
///
/// This simulates Eulerian structure; it does not verify that every edge of
/// the result is traversed exactly once.
pub fn eulerian_cycle<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    edge_count: i64,
) -> GraphResult<Graph> {
    if edge_count < 1 {
        return Err(GraphError::TooFewEdges {
            requested: edge_count,
            min: 1,
        });
    }

    if vertex_count < 1 {
        return Err(GraphError::TooFewVertices {
            required: 1,
            actual: vertex_count,
        });
    }

    let mut graph = GraphFactory::create(Direction::Undirected);
    let walk: Vec<String> = (0..edge_count)
        .map(|_| rng.gen_range(0..vertex_count).to_string())
        .collect();

    for pair in walk.windows(2) {
        graph.add_edge(&pair[0], &pair[1], random_weight(rng));
    }

    if let (Some(last), Some(first)) = (walk.last(), walk.first()) {
        graph.add_edge(last, first, random_weight(rng));
    }

    Ok(graph)
}

/// Random open walk of length `edge_count` over labels drawn uniformly from
/// [0, vertex_count). Same approximation caveat as [`eulerian_cycle`].
pub fn eulerian_path<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    edge_count: i64,
) -> GraphResult<Graph> {
    if edge_count < 0 {
        return Err(GraphError::TooFewEdges {
            requested: edge_count,
            min: 0,
        });
    }

    if vertex_count < 1 {
        return Err(GraphError::TooFewVertices {
            required: 1,
            actual: vertex_count,
        });
    }

    let mut graph = GraphFactory::create(Direction::Undirected);
    let walk: Vec<String> = (0..=edge_count)
        .map(|_| rng.gen_range(0..vertex_count).to_string())
        .collect();

    for pair in walk.windows(2) {
        graph.add_edge(&pair[0], &pair[1], random_weight(rng));
    }

    Ok(graph)
}

/// Wheel: a cycle among labels[1..] plus spokes from labels[0] to every
/// other vertex.
pub fn wheel<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> GraphResult<Graph> {
    if vertex_count < 2 {
        return Err(GraphError::TooFewVertices {
            required: 2,
            actual: vertex_count,
        });
    }

    let mut graph = GraphFactory::create(Direction::Undirected);
    let labels = shuffled_labels(rng, vertex_count);

    for pair in labels[1..].windows(2) {
        graph.add_edge(&pair[0], &pair[1], random_weight(rng));
    }

    graph.add_edge(&labels[vertex_count - 1], &labels[1], random_weight(rng));

    for spoke in &labels[1..] {
        graph.add_edge(&labels[0], spoke, random_weight(rng));
    }

    Ok(graph)
}

/// Star: one hub (labels[0]) connected to every other vertex.
pub fn star<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> GraphResult<Graph> {
    if vertex_count < 1 {
        return Err(GraphError::TooFewVertices {
            required: 1,
            actual: vertex_count,
        });
    }

    let mut graph = GraphFactory::create(Direction::Undirected);
    let labels = shuffled_labels(rng, vertex_count);

    for leaf in &labels[1..] {
        graph.add_edge(&labels[0], leaf, random_weight(rng));
    }

    Ok(graph)
}

/// Random k-regular graph via random perfect matching.
///
/// A multiset holding each label `degree` times is shuffled and consecutive
/// entries are paired up as edges. Stub-pair collisions (self-pairs,
/// repeated pairs) are absorbed by the edge dedup, so the result can fall
/// short of exact k-regularity; this construction is an approximation, not
/// a regularity guarantee.
pub fn regular<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    degree: usize,
) -> GraphResult<Graph> {
    if vertex_count * degree % 2 != 0 {
        return Err(GraphError::OddDegreeSum {
            vertices: vertex_count,
            degree,
        });
    }

    let mut graph = GraphFactory::create(Direction::Undirected);

    let mut stubs: Vec<String> = Vec::with_capacity(vertex_count * degree);
    for i in 0..vertex_count {
        for _ in 0..degree {
            stubs.push(i.to_string());
        }
    }

    stubs.shuffle(rng);

    for pair in stubs.chunks_exact(2) {
        graph.add_edge(&pair[0], &pair[1], random_weight(rng));
    }

    Ok(graph)
}

/// An empty graph whose direction is picked uniformly at random.
pub fn random_graph<R: Rng + ?Sized>(rng: &mut R) -> Graph {
    let direction = if rng.gen::<bool>() {
        Direction::Directed
    } else {
        Direction::Undirected
    };

    GraphFactory::create(direction)
}

/// A shuffled permutation of the labels "0" .. "vertex_count - 1".
///
/// Structured generators draw from this to avoid positional bias.
pub fn shuffled_labels<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> Vec<String> {
    let mut labels: Vec<String> = (0..vertex_count).map(|i| i.to_string()).collect();

    labels.shuffle(rng);

    labels
}

/// Uniform weight in [0, 1), floor-truncated to two decimal digits.
pub fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() * 100.0).floor() / 100.0
}

/// One Bernoulli trial: uniform U in [0, 1), true iff U < p.
pub fn bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Reject probabilities outside [0, 1] (NaN included).
fn check_probability(p: f64) -> GraphResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GraphError::InvalidProbability(p))
    }
}
