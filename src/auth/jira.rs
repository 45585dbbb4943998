//! Jira authentication

use crate::error::{Error, Result};
use std::env;
use std::path::Path;
use url::Url;

/// Environment variable holding the Jira base URL
pub const JIRA_URL_VAR: &str = "JIRA_URL";
/// Environment variable holding the Jira account email
pub const JIRA_EMAIL_VAR: &str = "JIRA_EMAIL";
/// Environment variable holding the Jira API token
pub const JIRA_TOKEN_VAR: &str = "JIRA_API_TOKEN";

const MISSING_SETTINGS: &str =
    "Please set JIRA_EMAIL, JIRA_API_TOKEN, and JIRA_URL environment variables";

/// Jira connection settings
#[derive(Clone)]
pub struct JiraAuthConfig {
    /// Base URL without trailing slash (e.g. "https://acme.atlassian.net")
    pub base_url: String,
    /// Account email used for basic auth
    pub email: String,
    /// API token used for basic auth
    pub token: String,
}

impl std::fmt::Debug for JiraAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraAuthConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl JiraAuthConfig {
    /// Build settings from a variable lookup
    ///
    /// Empty values count as missing. All three settings must be present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let (Some(url), Some(email), Some(token)) = (
            read(JIRA_URL_VAR),
            read(JIRA_EMAIL_VAR),
            read(JIRA_TOKEN_VAR),
        ) else {
            return Err(Error::Config(MISSING_SETTINGS.to_string()));
        };

        Ok(Self {
            base_url: normalize_base_url(&url)?,
            email,
            token,
        })
    }
}

/// Get Jira authentication from the process environment
pub fn get_jira_auth() -> Result<JiraAuthConfig> {
    JiraAuthConfig::from_lookup(|name| env::var(name).ok())
}

/// Load a dotenv settings file into the process environment
///
/// Variables already set in the environment win over the file. With no
/// explicit path, `.env` in the working directory is loaded if it exists.
pub fn load_settings_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenv::from_path(path).map_err(|e| {
                Error::Config(format!(
                    "cannot load settings file {}: {e}",
                    path.display()
                ))
            })?;
        }
        None => {
            dotenv::dotenv().ok();
        }
    }
    Ok(())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(format!("{raw}: expected an http(s) URL")));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
