//! Spinner-based progress reporting on stderr

use crate::cli::style::{spinner_style, Stylize};
use async_trait::async_trait;
use epic_graph::pipeline::{Phase, ProgressCallback};
use indicatif::ProgressBar;
use std::time::Duration;

/// CLI progress callback drawing a spinner on stderr
///
/// indicatif hides the spinner when stderr is not a terminal, so piping the
/// diagram somewhere stays clean.
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create a spinner that has not started ticking yet
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self { spinner }
    }

    /// Remove the spinner, e.g. before reporting an error
    pub fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Fetching => {
                self.spinner.enable_steady_tick(Duration::from_millis(80));
                self.spinner.set_message(format!("{phase}..."));
            }
            Phase::Building | Phase::Rendering => {
                self.spinner.set_message(format!("{phase}..."));
            }
            Phase::Complete => self.spinner.finish_and_clear(),
        }
    }

    async fn on_issues_fetched(&self, epic_key: &str, count: usize) {
        self.spinner.println(format!(
            "{} {} {}",
            "Fetched".muted(),
            count.accent(),
            format!("issues for {epic_key}").muted()
        ));
    }
}
