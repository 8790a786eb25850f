//! Reads edge-list files into a graph.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::{Direction, Graph, GraphFactory};
use crate::types::{GraphError, GraphResult};

/// Reader for `source,destination,weight` edge-list files.
///
/// Records have no header and exactly three comma-separated fields; fields
/// are whitespace-trimmed. A malformed record (wrong field count, blank
/// line, non-numeric weight) fails the whole import with the offending
/// 1-based line number — no partial graph is returned.
pub struct EdgeListReader {
    direction: Direction,
}

impl EdgeListReader {
    /// Create a reader that builds graphs of the given direction.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Read an edge-list file into a graph.
    pub fn read_from_file(&self, path: &Path) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;

        self.read_from(BufReader::new(file))
    }

    /// Read edge-list records from any buffered reader into a graph.
    pub fn read_from(&self, reader: impl BufRead) -> GraphResult<Graph> {
        let mut graph = GraphFactory::create(self.direction);
        let mut records = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != 3 {
                return Err(GraphError::BadRecord { line: line_no });
            }

            let weight: f64 = fields[2].parse().map_err(|_| GraphError::BadWeight {
                line: line_no,
                value: fields[2].to_string(),
            })?;

            graph.add_edge(fields[0], fields[1], weight);
            records += 1;
        }

        log::debug!(
            "imported {} records into a {} graph",
            records,
            graph.direction()
        );

        Ok(graph)
    }
}
