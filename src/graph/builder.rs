//! Dependency graph builder
//!
//! Builds a `DependencyGraph` from the issues of one epic.

use crate::types::{DependencyGraph, Edge, Issue, LinkDirection, Node};
use std::collections::HashSet;
use tracing::debug;

/// Default link type treated as "blocks"
pub const DEFAULT_BLOCKS_LINK_TYPE: &str = "Blocks";

/// Default status name marking an issue as closed
pub const DEFAULT_CLOSED_STATUS: &str = "closed";

/// Options controlling graph construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    /// Link type name to follow (exact match)
    pub blocks_link_type: String,
    /// Status name marking an issue as closed (case-insensitive)
    pub closed_status: String,
    /// Leave closed issues out of the graph entirely
    pub skip_closed: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            blocks_link_type: DEFAULT_BLOCKS_LINK_TYPE.to_string(),
            closed_status: DEFAULT_CLOSED_STATUS.to_string(),
            skip_closed: false,
        }
    }
}

impl GraphOptions {
    /// Whether a (raw or lowercased) status counts as closed
    pub fn is_closed(&self, status: &str) -> bool {
        status.to_lowercase() == self.closed_status.to_lowercase()
    }
}

/// Build a dependency graph from fetched issues
///
/// All nodes are registered before any link is resolved, so the result does
/// not depend on the order the tracker returned the issues in.
pub fn build_dependency_graph(issues: &[Issue], options: &GraphOptions) -> DependencyGraph {
    let mut nodes: Vec<Node> = Vec::new();
    let mut known: HashSet<&str> = HashSet::new();
    let mut included: Vec<&Issue> = Vec::new();

    for issue in issues {
        let status = issue.status.to_lowercase();

        if options.skip_closed && options.is_closed(&status) {
            debug!("Skipping closed issue {}", issue.key);
            continue;
        }

        if !known.insert(issue.key.as_str()) {
            debug!("Ignoring repeated issue {}", issue.key);
            continue;
        }

        nodes.push(Node {
            key: issue.key.clone(),
            summary: escape_summary(&issue.summary),
            status,
        });
        included.push(issue);
    }

    let mut edges: Vec<Edge> = Vec::new();
    let mut seen_edges: HashSet<Edge> = HashSet::new();

    for issue in included {
        for link in &issue.links {
            if link.link_type != options.blocks_link_type {
                continue;
            }

            let edge = match &link.direction {
                LinkDirection::Outward(target) => Edge::new(&issue.key, target),
                LinkDirection::Inward(source) => Edge::new(source, &issue.key),
                LinkDirection::Unresolved => continue,
            };

            if !known.contains(edge.source.as_str()) || !known.contains(edge.target.as_str()) {
                debug!(
                    "Dropping link {} -> {} outside the epic",
                    edge.source, edge.target
                );
                continue;
            }

            if seen_edges.insert(edge.clone()) {
                edges.push(edge);
            }
        }
    }

    let leaves = find_leaves(&nodes, &edges);

    debug!(
        "Built graph: {} nodes, {} edges, {} leaves",
        nodes.len(),
        edges.len(),
        leaves.len()
    );

    DependencyGraph {
        nodes,
        edges,
        leaves,
    }
}

/// Nodes that are not the source of any edge, in node order
fn find_leaves(nodes: &[Node], edges: &[Edge]) -> Vec<String> {
    let blocking: HashSet<&str> = edges.iter().map(|e| e.source.as_str()).collect();
    nodes
        .iter()
        .filter(|n| !blocking.contains(n.key.as_str()))
        .map(|n| n.key.clone())
        .collect()
}

/// Escape double quotes so the summary fits inside a quoted Mermaid label
fn escape_summary(summary: &str) -> String {
    summary.replace('"', "\\\"")
}
