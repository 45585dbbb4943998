//! Error types for epic-graph

use thiserror::Error;

/// Errors produced while fetching, building or rendering an epic graph
#[derive(Debug, Error)]
pub enum Error {
    /// Required settings are missing
    #[error("{0}")]
    Config(String),

    /// `JIRA_URL` is not a usable base URL
    #[error("invalid Jira URL: {0}")]
    InvalidUrl(String),

    /// Jira rejected the credentials
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Jira answered with a non-success status
    #[error("Jira API error: {0}")]
    JiraApi(String),

    /// Transport or decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
