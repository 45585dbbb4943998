//! Core types for epic-graph

/// An issue fetched from the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue key (e.g. "DATA-3377")
    pub key: String,
    /// One-line summary
    pub summary: String,
    /// Status name as reported by the tracker
    pub status: String,
    /// Typed links to other issues
    pub links: Vec<IssueLink>,
}

/// A typed link attached to an issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLink {
    /// Link type name (e.g. "Blocks")
    pub link_type: String,
    /// Which side of the link the other issue sits on
    pub direction: LinkDirection,
}

/// Direction of a link relative to the issue carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDirection {
    /// This issue blocks the named issue
    Outward(String),
    /// The named issue blocks this issue
    Inward(String),
    /// Neither side was present in the payload
    Unresolved,
}

/// A graph node built from an included issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Issue key, used as the Mermaid node id
    pub key: String,
    /// Summary with double quotes escaped
    pub summary: String,
    /// Lowercased status name
    pub status: String,
}

/// "source blocks target"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Issue that must be resolved first
    pub source: String,
    /// Issue waiting on `source`
    pub target: String,
}

impl Edge {
    /// Create an edge from `source` to `target`
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Blocking relationships among the issues of one epic
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Nodes in insertion (fetch) order
    pub nodes: Vec<Node>,
    /// Edges in discovery order
    pub edges: Vec<Edge>,
    /// Keys of nodes that block nothing, in node order
    pub leaves: Vec<String>,
}
