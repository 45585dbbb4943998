//! Mock issue tracker for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use epic_graph::error::{Error, Result};
use epic_graph::tracker::IssueTracker;
use epic_graph::types::Issue;
use std::sync::Mutex;

use super::fixtures::BASE_URL;

/// Call record for `search_epic_issues`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub epic_key: String,
    pub max_results: u32,
}

/// Simple mock tracker returning a fixed issue list
///
/// Features:
/// - Canned issues returned in the given order
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockTracker {
    base_url: String,
    issues: Vec<Issue>,
    search_calls: Mutex<Vec<SearchCall>>,
    error_on_search: Mutex<Option<Error>>,
}

impl MockTracker {
    /// Create a mock returning `issues`
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            issues,
            search_calls: Mutex::new(Vec::new()),
            error_on_search: Mutex::new(None),
        }
    }

    /// Make the next search fail with an authentication error
    pub fn fail_auth(&self, msg: &str) {
        *self.error_on_search.lock().unwrap() = Some(Error::Auth(msg.to_string()));
    }

    /// Make the next search fail with an API error
    pub fn fail_search(&self, msg: &str) {
        *self.error_on_search.lock().unwrap() = Some(Error::JiraApi(msg.to_string()));
    }

    /// Get all `search_epic_issues` calls
    pub fn get_search_calls(&self) -> Vec<SearchCall> {
        self.search_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn search_epic_issues(&self, epic_key: &str, max_results: u32) -> Result<Vec<Issue>> {
        self.search_calls.lock().unwrap().push(SearchCall {
            epic_key: epic_key.to_string(),
            max_results,
        });

        if let Some(err) = self.error_on_search.lock().unwrap().take() {
            return Err(err);
        }

        Ok(self
            .issues
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
