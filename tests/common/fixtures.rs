//! Test data factories for epic-graph types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use epic_graph::types::{Issue, IssueLink, LinkDirection};

/// Base URL used by fixtures
pub const BASE_URL: &str = "https://acme.atlassian.net";

/// Create an open issue with no links
pub fn make_issue(key: &str) -> Issue {
    Issue {
        key: key.to_string(),
        summary: format!("Work item {key}"),
        status: "Open".to_string(),
        links: vec![],
    }
}

/// Create an issue with a specific status
pub fn make_issue_with_status(key: &str, status: &str) -> Issue {
    Issue {
        status: status.to_string(),
        ..make_issue(key)
    }
}

/// Create a closed issue
pub fn make_closed_issue(key: &str) -> Issue {
    make_issue_with_status(key, "Closed")
}

/// Outward "Blocks" link: the carrying issue blocks `target`
pub fn blocks(target: &str) -> IssueLink {
    link("Blocks", LinkDirection::Outward(target.to_string()))
}

/// Inward "Blocks" link: `source` blocks the carrying issue
pub fn blocked_by(source: &str) -> IssueLink {
    link("Blocks", LinkDirection::Inward(source.to_string()))
}

/// Link with an arbitrary type name
pub fn link(link_type: &str, direction: LinkDirection) -> IssueLink {
    IssueLink {
        link_type: link_type.to_string(),
        direction,
    }
}

/// Attach links to an issue
pub fn with_links(mut issue: Issue, links: Vec<IssueLink>) -> Issue {
    issue.links = links;
    issue
}

/// Linear chain where each issue blocks the next: keys[0] -> keys[1] -> ...
///
/// Links are recorded on both ends, as Jira reports them.
pub fn make_chain(keys: &[&str]) -> Vec<Issue> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| {
            let mut links = vec![];
            if i > 0 {
                links.push(blocked_by(keys[i - 1]));
            }
            if i + 1 < keys.len() {
                links.push(blocks(keys[i + 1]));
            }
            with_links(make_issue(key), links)
        })
        .collect()
}
