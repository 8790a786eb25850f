//! Randomized and structured graph generators.

pub mod generator;

pub use generator::{
    bernoulli, binary_tree, bipartite, bipartite_p, complete, complete_bipartite, cycle,
    eulerian_cycle, eulerian_path, path, random_graph, random_weight, regular, shuffled_labels,
    simple, simple_p, star, wheel,
};
