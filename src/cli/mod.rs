//! CLI commands
//!
//! Command implementations for the `epic-graph` binary.

mod graph;
mod progress;
pub mod style;

pub use graph::run_graph;
