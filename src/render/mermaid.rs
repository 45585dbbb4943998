//! Mermaid flowchart rendering

use crate::graph::DEFAULT_CLOSED_STATUS;
use crate::types::DependencyGraph;
use std::fmt::{self, Write};

/// Default layout engine selected in the front matter
pub const DEFAULT_LAYOUT: &str = "elk";

/// Default style for closed issues
pub const DEFAULT_CLOSED_STYLE: &str = "fill:#eee,stroke:#999,text-decoration:line-through";

/// Style for the synthetic epic node
pub const EPIC_STYLE: &str = "fill:#e6f3ff,stroke:#4d9fff,stroke-width:2px";

const INDENT: &str = "    ";

/// Options controlling diagram output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Key of the epic every leaf points to
    pub epic_key: String,
    /// Tracker base URL, without trailing slash
    pub base_url: String,
    /// Status name marking an issue as closed (case-insensitive)
    pub closed_status: String,
    /// Layout engine for the front matter
    pub layout: String,
    /// Style directive applied to closed issues
    pub closed_style: String,
}

impl RenderOptions {
    /// Options with default layout and styles
    pub fn new(epic_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            epic_key: epic_key.into(),
            base_url: base_url.into(),
            closed_status: DEFAULT_CLOSED_STATUS.to_string(),
            layout: DEFAULT_LAYOUT.to_string(),
            closed_style: DEFAULT_CLOSED_STYLE.to_string(),
        }
    }

    fn label(&self, key: &str, text: &str) -> String {
        format!(
            r#""<a href="{}/browse/{key}">{key}</a><br>{text}""#,
            self.base_url
        )
    }
}

/// Render a dependency graph as a Mermaid flowchart
///
/// Nodes come out in insertion order, then the epic node, then edges in
/// discovery order, then one edge from each leaf to the epic.
pub fn render_mermaid(graph: &DependencyGraph, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_mermaid(&mut out, graph, options).expect("writing to a String never fails");
    out
}

fn write_mermaid(
    out: &mut String,
    graph: &DependencyGraph,
    options: &RenderOptions,
) -> fmt::Result {
    let closed_status = options.closed_status.to_lowercase();
    let epic = &options.epic_key;

    writeln!(out, "---")?;
    writeln!(out, "config:")?;
    writeln!(out, "  layout: {}", options.layout)?;
    writeln!(out, "---")?;
    writeln!(out, "flowchart TD")?;

    for node in &graph.nodes {
        writeln!(
            out,
            "{INDENT}{}[{}]",
            node.key,
            options.label(&node.key, &node.summary)
        )?;
        if node.status == closed_status {
            writeln!(out, "{INDENT}style {} {}", node.key, options.closed_style)?;
        }
    }

    writeln!(out, "{INDENT}{epic}[{}]", options.label(epic, "Epic"))?;
    writeln!(out, "{INDENT}style {epic} {EPIC_STYLE}")?;

    for edge in &graph.edges {
        writeln!(out, "{INDENT}{} --> {}", edge.source, edge.target)?;
    }

    for leaf in &graph.leaves {
        writeln!(out, "{INDENT}{leaf} --> {epic}")?;
    }

    Ok(())
}
