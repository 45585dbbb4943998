//! epic-graph - Jira epic dependency graphs for Mermaid
//!
//! Fetches the child issues of an epic, rebuilds the "blocks" relationships
//! between them and renders a Mermaid flowchart.

pub mod auth;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod render;
pub mod tracker;
pub mod types;
