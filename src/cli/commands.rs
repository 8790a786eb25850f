//! CLI command implementations.

use std::path::Path;

use crate::format::{EdgeListReader, EdgeListWriter};
use crate::graph::{traversal, Direction, Graph};
use crate::types::{GraphError, GraphResult};

/// Which traversal algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    BreadthFirst,
    DepthFirst,
}

impl TraversalKind {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse an algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "bf" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "df" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

/// Write a freshly generated graph to a file, or print it when no
/// destination is given.
pub fn cmd_write_graph(graph: &Graph, out: Option<&Path>, json: bool) -> GraphResult<()> {
    match out {
        Some(path) => {
            EdgeListWriter::write_to_file(graph, path)?;

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "file": path.display().to_string(),
                        "direction": graph.direction().name(),
                        "vertices": graph.vertex_count(),
                        "stored_edges": graph.edge_count(),
                    })
                );
            } else {
                println!(
                    "Wrote {} graph ({} vertices, {} stored edges) to {}",
                    graph.direction(),
                    graph.vertex_count(),
                    graph.edge_count(),
                    path.display()
                );
            }
        }
        None => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string(&graph.snapshot()).unwrap_or_default()
                );
            } else {
                print!("{}", graph);
            }
        }
    }

    Ok(())
}

/// Display summary information about an edge-list file.
pub fn cmd_info(path: &Path, direction: Direction, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::new(direction).read_from_file(path)?;

    let degrees: Vec<usize> = graph.vertex_map().values().map(Vec::len).collect();
    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let avg_degree = if degrees.is_empty() {
        0.0
    } else {
        graph.edge_count() as f64 / degrees.len() as f64
    };

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "direction": graph.direction().name(),
            "vertices": graph.vertex_count(),
            "stored_edges": graph.edge_count(),
            "degree": {
                "min": min_degree,
                "max": max_degree,
                "avg": avg_degree,
            }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Direction: {}", graph.direction());
        println!("Vertices: {}", graph.vertex_count());
        println!("Stored edges: {}", graph.edge_count());
        println!("Degree: min {} / max {} / avg {:.2}", min_degree, max_degree, avg_degree);
    }

    Ok(())
}

/// Print the canonical text rendering of an edge-list file.
pub fn cmd_show(path: &Path, direction: Direction) -> GraphResult<()> {
    let graph = EdgeListReader::new(direction).read_from_file(path)?;

    print!("{}", graph);

    Ok(())
}

/// Run a traversal over an edge-list file and print the visit order.
pub fn cmd_traverse(
    path: &Path,
    direction: Direction,
    kind: TraversalKind,
    from: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let graph = EdgeListReader::new(direction).read_from_file(path)?;

    let start = match from {
        Some(label) => label.to_string(),
        None => graph
            .vertex_map()
            .keys()
            .next()
            .ok_or(GraphError::EmptyGraph)?
            .clone(),
    };

    match kind {
        TraversalKind::BreadthFirst => {
            let (order, levels) = traversal::breadth_first_with_levels(&graph, &start)?;

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "algorithm": kind.name(),
                        "start": start,
                        "order": order,
                        "levels": levels,
                    })
                );
            } else {
                println!("Visit order: {}", order.join(" "));

                let mut by_level: Vec<(&String, &usize)> = levels.iter().collect();
                by_level.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
                for (label, level) in by_level {
                    println!("  level {}: {}", level, label);
                }
            }
        }
        TraversalKind::DepthFirst => {
            let order = traversal::depth_first(&graph, &start)?;

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "algorithm": kind.name(),
                        "start": start,
                        "order": order,
                    })
                );
            } else {
                println!("Visit order: {}", order.join(" "));
            }
        }
    }

    Ok(())
}

/// Emit the JSON snapshot of an edge-list file for an external renderer.
pub fn cmd_snapshot(path: &Path, direction: Direction, pretty: bool) -> GraphResult<()> {
    let graph = EdgeListReader::new(direction).read_from_file(path)?;
    let snapshot = graph.snapshot();

    let rendered = if pretty {
        serde_json::to_string_pretty(&snapshot).unwrap_or_default()
    } else {
        serde_json::to_string(&snapshot).unwrap_or_default()
    };

    println!("{}", rendered);

    Ok(())
}
