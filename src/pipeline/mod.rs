//! Epic graph pipeline
//!
//! Runs the three stages in order:
//! 1. Fetch - query the tracker for the epic's children
//! 2. Build - derive nodes, blocking edges and leaves
//! 3. Render - format the Mermaid flowchart

mod progress;
mod run;

pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use run::{generate_epic_graph, EpicGraph, PipelineRequest};
