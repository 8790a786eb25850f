//! CLI entry point for the `ggen` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use graphgen::cli::commands::{self, TraversalKind};
use graphgen::generate;
use graphgen::graph::Direction;
use graphgen::types::GraphResult;
use graphgen::Graph;

#[derive(Parser)]
#[command(
    name = "ggen",
    about = "Weighted graph toolkit — generators, traversal, edge-list I/O"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a graph and write it as an edge list
    Generate {
        /// Destination edge-list file (prints the graph when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Seed for deterministic generation
        #[arg(long)]
        seed: Option<u64>,
        #[command(subcommand)]
        family: Family,
    },
    /// Display summary information about an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
        /// Read the file as a directed graph
        #[arg(long)]
        directed: bool,
    },
    /// Print the canonical text rendering of an edge-list file
    Show {
        /// Path to the edge-list file
        file: PathBuf,
        /// Read the file as a directed graph
        #[arg(long)]
        directed: bool,
    },
    /// Run a traversal and print the visit order
    Traverse {
        /// Path to the edge-list file
        file: PathBuf,
        /// Algorithm: bfs or dfs
        algorithm: String,
        /// Starting vertex label (first canonical label when omitted)
        #[arg(long)]
        from: Option<String>,
        /// Read the file as a directed graph
        #[arg(long)]
        directed: bool,
    },
    /// Emit a JSON snapshot for an external renderer
    Snapshot {
        /// Path to the edge-list file
        file: PathBuf,
        /// Read the file as a directed graph
        #[arg(long)]
        directed: bool,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Subcommand)]
enum Family {
    /// Complete graph on the given number of vertices
    Complete { vertices: usize },
    /// Random simple graph: exact edge count or per-pair probability
    Simple {
        vertices: usize,
        /// Exact number of edges
        #[arg(long, conflicts_with = "probability")]
        edges: Option<i64>,
        /// Per-pair inclusion probability in [0, 1]
        #[arg(long)]
        probability: Option<f64>,
    },
    /// Random bipartite graph: exact edge count or per-pair probability
    Bipartite {
        left: usize,
        right: usize,
        /// Exact number of cross-partition edges
        #[arg(long, conflicts_with = "probability")]
        edges: Option<i64>,
        /// Per-pair inclusion probability in [0, 1]
        #[arg(long)]
        probability: Option<f64>,
    },
    /// Complete bipartite graph
    CompleteBipartite { left: usize, right: usize },
    /// Undirected chain
    Path { vertices: usize },
    /// Undirected complete binary tree
    BinaryTree { vertices: usize },
    /// Undirected ring
    Cycle { vertices: usize },
    /// Random closed walk of the given length
    EulerianCycle { vertices: usize, edges: i64 },
    /// Random open walk of the given length
    EulerianPath { vertices: usize, edges: i64 },
    /// Cycle plus spokes from a hub
    Wheel { vertices: usize },
    /// One hub connected to every other vertex
    Star { vertices: usize },
    /// Random k-regular graph via random matching
    Regular { vertices: usize, degree: usize },
}

fn build_family(rng: &mut StdRng, family: Family) -> GraphResult<Graph> {
    match family {
        Family::Complete { vertices } => generate::complete(rng, vertices),
        Family::Simple {
            vertices,
            edges,
            probability,
        } => match (edges, probability) {
            (Some(m), None) => generate::simple(rng, vertices, m),
            (None, Some(p)) => generate::simple_p(rng, vertices, p),
            _ => {
                eprintln!("simple requires exactly one of --edges or --probability");
                process::exit(3);
            }
        },
        Family::Bipartite {
            left,
            right,
            edges,
            probability,
        } => match (edges, probability) {
            (Some(m), None) => generate::bipartite(rng, left, right, m),
            (None, Some(p)) => generate::bipartite_p(rng, left, right, p),
            _ => {
                eprintln!("bipartite requires exactly one of --edges or --probability");
                process::exit(3);
            }
        },
        Family::CompleteBipartite { left, right } => generate::complete_bipartite(rng, left, right),
        Family::Path { vertices } => Ok(generate::path(rng, vertices)),
        Family::BinaryTree { vertices } => Ok(generate::binary_tree(rng, vertices)),
        Family::Cycle { vertices } => Ok(generate::cycle(rng, vertices)),
        Family::EulerianCycle { vertices, edges } => generate::eulerian_cycle(rng, vertices, edges),
        Family::EulerianPath { vertices, edges } => generate::eulerian_path(rng, vertices, edges),
        Family::Wheel { vertices } => generate::wheel(rng, vertices),
        Family::Star { vertices } => generate::star(rng, vertices),
        Family::Regular { vertices, degree } => generate::regular(rng, vertices, degree),
    }
}

fn direction_flag(directed: bool) -> Direction {
    if directed {
        Direction::Directed
    } else {
        Direction::Undirected
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is a dev-dependency; release builds carry no logger impl
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Generate { out, seed, family } => {
            let mut rng: StdRng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            build_family(&mut rng, family)
                .and_then(|graph| commands::cmd_write_graph(&graph, out.as_deref(), json))
        }
        Commands::Info { file, directed } => {
            commands::cmd_info(&file, direction_flag(directed), json)
        }
        Commands::Show { file, directed } => commands::cmd_show(&file, direction_flag(directed)),
        Commands::Traverse {
            file,
            algorithm,
            from,
            directed,
        } => {
            let kind = match TraversalKind::from_name(&algorithm) {
                Some(kind) => kind,
                None => {
                    eprintln!("Unrecognized traversal algorithm: {}", algorithm);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, direction_flag(directed), kind, from.as_deref(), json)
        }
        Commands::Snapshot {
            file,
            directed,
            pretty,
        } => commands::cmd_snapshot(&file, direction_flag(directed), pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            graphgen::GraphError::Io(_) => 1,
            graphgen::GraphError::BadRecord { .. } | graphgen::GraphError::BadWeight { .. } => 2,
            graphgen::GraphError::TooManyEdges { .. }
            | graphgen::GraphError::TooFewEdges { .. }
            | graphgen::GraphError::InvalidProbability(_)
            | graphgen::GraphError::OddDegreeSum { .. }
            | graphgen::GraphError::TooFewVertices { .. } => 3,
            graphgen::GraphError::VertexNotFound(_) | graphgen::GraphError::EmptyGraph => 4,
        };
        process::exit(code);
    }
}
