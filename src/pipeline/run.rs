//! Fetch, build and render in one pass

use crate::error::Result;
use crate::graph::{build_dependency_graph, GraphOptions};
use crate::pipeline::progress::{Phase, ProgressCallback};
use crate::render::{render_mermaid, RenderOptions, DEFAULT_CLOSED_STYLE, DEFAULT_LAYOUT};
use crate::tracker::{IssueTracker, MAX_RESULTS};
use crate::types::DependencyGraph;

/// Everything needed to draw one epic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    /// Epic whose children are drawn
    pub epic_key: String,
    /// Graph construction options
    pub graph: GraphOptions,
    /// Layout engine for the front matter
    pub layout: String,
    /// Style directive applied to closed issues
    pub closed_style: String,
}

impl PipelineRequest {
    /// Request with default options
    pub fn new(epic_key: impl Into<String>) -> Self {
        Self {
            epic_key: epic_key.into(),
            graph: GraphOptions::default(),
            layout: DEFAULT_LAYOUT.to_string(),
            closed_style: DEFAULT_CLOSED_STYLE.to_string(),
        }
    }

    fn render_options(&self, base_url: &str) -> RenderOptions {
        RenderOptions {
            epic_key: self.epic_key.clone(),
            base_url: base_url.to_string(),
            closed_status: self.graph.closed_status.clone(),
            layout: self.layout.clone(),
            closed_style: self.closed_style.clone(),
        }
    }
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct EpicGraph {
    /// Number of issues the tracker returned
    pub issue_count: usize,
    /// The built graph
    pub graph: DependencyGraph,
    /// Rendered Mermaid flowchart
    pub diagram: String,
}

/// Generate the dependency diagram for an epic
///
/// Any tracker error aborts the run before anything is rendered.
pub async fn generate_epic_graph(
    tracker: &dyn IssueTracker,
    request: &PipelineRequest,
    progress: &dyn ProgressCallback,
) -> Result<EpicGraph> {
    progress.on_phase(Phase::Fetching).await;
    let issues = tracker
        .search_epic_issues(&request.epic_key, MAX_RESULTS)
        .await?;
    progress
        .on_issues_fetched(&request.epic_key, issues.len())
        .await;

    progress.on_phase(Phase::Building).await;
    let graph = build_dependency_graph(&issues, &request.graph);

    progress.on_phase(Phase::Rendering).await;
    let diagram = render_mermaid(&graph, &request.render_options(tracker.base_url()));

    progress.on_phase(Phase::Complete).await;

    Ok(EpicGraph {
        issue_count: issues.len(),
        graph,
        diagram,
    })
}
