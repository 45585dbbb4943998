//! Authentication for Jira
//!
//! Reads connection settings from the environment, optionally seeded from a
//! dotenv settings file.

mod jira;

pub use jira::{
    get_jira_auth, load_settings_file, JiraAuthConfig, JIRA_EMAIL_VAR, JIRA_TOKEN_VAR,
    JIRA_URL_VAR,
};
