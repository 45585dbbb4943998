//! epic-graph - Jira epic dependency graphs
//!
//! CLI binary printing the blocking relationships inside an epic as a
//! Mermaid flowchart.

use anstream::eprintln;
use clap::Parser;
use epic_graph::graph::{GraphOptions, DEFAULT_BLOCKS_LINK_TYPE, DEFAULT_CLOSED_STATUS};
use epic_graph::pipeline::PipelineRequest;
use epic_graph::render::{DEFAULT_CLOSED_STYLE, DEFAULT_LAYOUT};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::style::Stylize;

#[derive(Parser)]
#[command(name = "epic-graph")]
#[command(about = "Generate a Mermaid dependency graph for a Jira epic")]
#[command(version)]
struct Cli {
    /// The key of the epic to analyze (e.g. DATA-3377)
    epic_key: String,

    /// The Jira link type to follow
    #[arg(long = "blocks-linktype", default_value = DEFAULT_BLOCKS_LINK_TYPE)]
    blocks_linktype: String,

    /// The status name that indicates a closed issue
    #[arg(long, default_value = DEFAULT_CLOSED_STATUS)]
    closed_status: String,

    /// Skip closed issues in the graph
    #[arg(long)]
    skip_closed: bool,

    /// Mermaid layout engine
    #[arg(long, default_value = DEFAULT_LAYOUT)]
    layout: String,

    /// Style applied to closed issues
    #[arg(long, default_value = DEFAULT_CLOSED_STYLE)]
    closed_style: String,

    /// Settings file with JIRA_URL, JIRA_EMAIL and JIRA_API_TOKEN (defaults to ./.env)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

impl Cli {
    fn request(&self) -> PipelineRequest {
        PipelineRequest {
            epic_key: self.epic_key.clone(),
            graph: GraphOptions {
                blocks_link_type: self.blocks_linktype.clone(),
                closed_status: self.closed_status.clone(),
                skip_closed: self.skip_closed,
            },
            layout: self.layout.clone(),
            closed_style: self.closed_style.clone(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cli::run_graph(&cli.request(), cli.env_file.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err:#}", "error".error());
            ExitCode::FAILURE
        }
    }
}
