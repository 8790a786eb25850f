//! Flat-text edge-list I/O.

pub mod reader;
pub mod writer;

pub use reader::EdgeListReader;
pub use writer::EdgeListWriter;
