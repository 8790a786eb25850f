//! CLI support for the `ggen` binary.

pub mod commands;

pub use commands::TraversalKind;
