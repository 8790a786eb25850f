//! Writes a graph as an edge-list file.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Writer for `source,destination,weight` edge-list files.
///
/// One record per stored edge, in canonical order; an undirected graph
/// writes both mirrored entries, which re-import absorbs through the edge
/// dedup.
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Write a graph to an edge-list file.
    pub fn write_to_file(graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);

        Self::write_to(graph, &mut writer)
    }

    /// Write edge-list records to any writer.
    pub fn write_to(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let mut records = 0usize;

        for (label, edges) in graph.vertex_map() {
            for edge in edges {
                writeln!(writer, "{},{},{}", label, edge.dest, edge.weight)?;
                records += 1;
            }
        }

        writer.flush()?;

        log::debug!("exported {} records", records);

        Ok(())
    }
}
