//! Relay CLI
//!
//! Triggers a CircleCI pipeline, waits for it to finish, collects the
//! artifacts of every job into `artifacts.json` and exits non-zero when any
//! job failed.

mod config;
mod report;
mod run;

use anyhow::{Context, Result};
use clap::Parser;
use relay_client::CircleClient;
use relay_core::domain::pipeline::ProjectSlug;
use relay_core::outcome::Outcome;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use run::Orchestrator;

/// Per-request timeout for calls to the CI service
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Trigger a CircleCI pipeline and collect its results", long_about = None)]
struct Cli {
    /// Organization owning the project
    #[arg(long, env = "CIRCLE_ORG")]
    org: String,

    /// Repository name
    #[arg(long, env = "CIRCLE_PROJECT_REPONAME")]
    repo: String,

    /// API token
    #[arg(long, env = "CIRCLE_TOKEN", hide_env_values = true)]
    token: String,

    /// Branch to build (defaults to main)
    #[arg(long, env = "CIRCLE_BRANCH")]
    branch: Option<String>,

    /// Fetch and print the first log line of every step
    #[arg(
        long,
        env = "RELAY_FETCH_LOGS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    fetch_logs: bool,

    /// Directory artifacts.json is written to
    #[arg(long, env = "RELAY_WORKDIR", default_value = ".")]
    workdir: PathBuf,

    /// Version control provider short name
    #[arg(long, env = "RELAY_VCS", default_value = "gh")]
    vcs: String,

    /// CI service URL
    #[arg(long, env = "CIRCLE_BASE_URL", default_value = "https://circleci.com")]
    base_url: String,

    /// Seconds between workflow polls
    #[arg(long, env = "RELAY_POLL_INTERVAL", default_value_t = 10)]
    poll_interval: u64,

    /// Seconds to wait for the first workflow before giving up
    #[arg(long, env = "RELAY_DISCOVERY_TIMEOUT", default_value_t = 30)]
    discovery_timeout: u64,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mut config = Config::new(ProjectSlug::new(cli.vcs, cli.org, cli.repo), cli.token);
        config.base_url = cli.base_url;
        config.branch = cli.branch;
        config.fetch_logs = cli.fetch_logs;
        config.workdir = cli.workdir;
        config.poll_interval = Duration::from_secs(cli.poll_interval);
        config.discovery_timeout = Duration::from_secs(cli.discovery_timeout);
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_cli=info,relay_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(Cli::parse());

    match run(&config).await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<Outcome> {
    config.validate()?;
    info!(
        "Running pipeline for {} on branch {}",
        config.project,
        config.branch()
    );

    let http_client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;
    let client = CircleClient::with_client(
        config.base_url.clone(),
        config.project.clone(),
        config.token.clone(),
        http_client,
    );

    let orchestrator = Orchestrator::new(&client, config);
    let result = orchestrator.run().await.context("Pipeline run aborted")?;

    report::print_summary(&result, orchestrator.store().path());

    Ok(result.outcome())
}
