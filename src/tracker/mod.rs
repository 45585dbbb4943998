//! Issue tracker services
//!
//! Provides the search interface the pipeline fetches epic children through.

mod jira;

pub use jira::JiraService;

use crate::error::Result;
use crate::types::Issue;
use async_trait::async_trait;

/// Upper bound on issues fetched for one epic
pub const MAX_RESULTS: u32 = 500;

/// Issue tracker trait for epic queries
///
/// Abstracts the tracker so the pipeline can run against Jira or a test
/// double.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch the child issues of an epic, at most `max_results` of them
    async fn search_epic_issues(&self, epic_key: &str, max_results: u32) -> Result<Vec<Issue>>;

    /// Base URL used to build browse links
    fn base_url(&self) -> &str;
}
