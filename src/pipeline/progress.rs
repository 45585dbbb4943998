//! Progress callback trait for interface-agnostic updates
//!
//! Lets the CLI (or anything else driving the pipeline) follow a run without
//! the pipeline writing to a terminal itself.

use async_trait::async_trait;
use std::fmt;

/// Pipeline phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Querying the tracker for epic children
    Fetching,
    /// Building nodes, edges and leaves
    Building,
    /// Formatting the diagram
    Rendering,
    /// Run complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetching => write!(f, "Fetching issues"),
            Self::Building => write!(f, "Building graph"),
            Self::Rendering => write!(f, "Rendering diagram"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates while a graph is
/// generated.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the tracker has answered
    async fn on_issues_fetched(&self, epic_key: &str, count: usize);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_issues_fetched(&self, _epic_key: &str, _count: usize) {}
}
