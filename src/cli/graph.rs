//! Graph command - print the Mermaid diagram for an epic

use crate::cli::progress::CliProgress;
use anyhow::{Context, Result};
use epic_graph::auth::{get_jira_auth, load_settings_file};
use epic_graph::pipeline::{generate_epic_graph, PipelineRequest};
use epic_graph::tracker::JiraService;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Run the graph command
///
/// Settings are resolved before any request goes out. The diagram is written
/// to stdout only after the whole pipeline succeeded.
pub async fn run_graph(request: &PipelineRequest, env_file: Option<&Path>) -> Result<()> {
    load_settings_file(env_file)?;
    let auth = get_jira_auth()?;
    debug!("Using Jira at {}", auth.base_url);

    let tracker = JiraService::new(auth)?;
    let progress = CliProgress::new();

    let result = generate_epic_graph(&tracker, request, &progress).await;
    progress.clear();
    let epic = result.with_context(|| format!("cannot build graph for {}", request.epic_key))?;

    info!(
        "{} issues fetched, {} nodes, {} edges, {} leaves",
        epic.issue_count,
        epic.graph.nodes.len(),
        epic.graph.edges.len(),
        epic.graph.leaves.len()
    );

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(epic.diagram.as_bytes())
        .and_then(|()| stdout.flush())
        .context("cannot write diagram to stdout")?;

    Ok(())
}
