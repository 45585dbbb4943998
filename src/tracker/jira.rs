//! Jira tracker service implementation

use crate::auth::JiraAuthConfig;
use crate::error::{Error, Result};
use crate::tracker::IssueTracker;
use crate::types::{Issue, IssueLink, LinkDirection};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Jira service using reqwest
pub struct JiraService {
    client: Client,
    config: JiraAuthConfig,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total: usize,
    #[serde(default)]
    issues: Vec<RawIssue>,
}

#[derive(Deserialize)]
struct RawIssue {
    key: String,
    fields: RawFields,
}

#[derive(Deserialize)]
struct RawFields {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    status: Option<RawStatus>,
    #[serde(default)]
    issuelinks: Vec<RawLink>,
}

#[derive(Deserialize)]
struct RawStatus {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLink {
    #[serde(rename = "type")]
    link_type: RawLinkType,
    #[serde(default)]
    outward_issue: Option<LinkedIssue>,
    #[serde(default)]
    inward_issue: Option<LinkedIssue>,
}

#[derive(Deserialize)]
struct RawLinkType {
    name: String,
}

#[derive(Deserialize)]
struct LinkedIssue {
    key: String,
}

impl From<RawLink> for IssueLink {
    fn from(link: RawLink) -> Self {
        let direction = match (link.outward_issue, link.inward_issue) {
            (Some(outward), _) => LinkDirection::Outward(outward.key),
            (None, Some(inward)) => LinkDirection::Inward(inward.key),
            (None, None) => LinkDirection::Unresolved,
        };
        Self {
            link_type: link.link_type.name,
            direction,
        }
    }
}

impl From<RawIssue> for Issue {
    fn from(issue: RawIssue) -> Self {
        Self {
            key: issue.key,
            summary: issue.fields.summary.unwrap_or_default(),
            status: issue.fields.status.map(|s| s.name).unwrap_or_default(),
            links: issue
                .fields
                .issuelinks
                .into_iter()
                .map(IssueLink::from)
                .collect(),
        }
    }
}

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fields requested from the search endpoint
const SEARCH_FIELDS: &str = "summary,status,issuelinks";

impl JiraService {
    /// Create a new Jira service
    pub fn new(config: JiraAuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/2{}", self.config.base_url, path)
    }

    async fn search_page(
        &self,
        jql: &str,
        start_at: usize,
        page_size: usize,
    ) -> Result<SearchResponse> {
        let start_at = start_at.to_string();
        let page_size = page_size.to_string();

        let response = self
            .client
            .get(self.api_url("/search"))
            .basic_auth(&self.config.email, Some(&self.config.token))
            .header(ACCEPT, "application/json")
            .query(&[
                ("jql", jql),
                ("startAt", start_at.as_str()),
                ("maxResults", page_size.as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Auth(format!(
                "Jira returned {status} for {}",
                self.config.email
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::JiraApi(format!("{status}: {}", body.trim())));
        }

        Ok(response.json().await?)
    }
}

/// JQL selecting every child of an epic
pub(crate) fn epic_children_jql(epic_key: &str) -> String {
    format!("\"Epic Link\" = {epic_key}")
}

#[async_trait]
impl IssueTracker for JiraService {
    async fn search_epic_issues(&self, epic_key: &str, max_results: u32) -> Result<Vec<Issue>> {
        let jql = epic_children_jql(epic_key);
        let limit = max_results as usize;
        let mut issues: Vec<Issue> = Vec::new();

        debug!("Searching Jira: {jql}");

        // Jira caps each page below maxResults, so keep paging on startAt
        loop {
            let page = self
                .search_page(&jql, issues.len(), limit - issues.len())
                .await?;
            let page_len = page.issues.len();
            let wanted = page.total.min(limit);

            debug!(
                "Fetched page of {page_len} issues at {} (total {})",
                issues.len(),
                page.total
            );
            issues.extend(page.issues.into_iter().map(Issue::from));

            if page_len == 0 || issues.len() >= wanted {
                if page.total > limit {
                    warn!(
                        "Epic {epic_key} has {} issues, only the first {limit} were fetched",
                        page.total
                    );
                }
                break;
            }
        }

        issues.truncate(limit);
        info!("Fetched {} issues for epic {epic_key}", issues.len());

        Ok(issues)
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
