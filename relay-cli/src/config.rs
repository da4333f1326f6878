//! Configuration module
//!
//! Settings for a single pipeline run, assembled from CLI flags and
//! environment variables.

use relay_core::domain::pipeline::{ProjectSlug, resolve_branch};
use std::path::PathBuf;
use std::time::Duration;

/// Name of the artifact map written into the working directory
pub const ARTIFACTS_FILE: &str = "artifacts.json";

/// Run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the CI service
    pub base_url: String,

    /// Project whose pipeline is triggered
    pub project: ProjectSlug,

    /// API token
    pub token: String,

    /// Branch to trigger; empty or absent means the default branch
    pub branch: Option<String>,

    /// Whether to fetch and print step logs for every job
    pub fetch_logs: bool,

    /// Directory the artifact map is written to
    pub workdir: PathBuf,

    /// Sleep between workflow polls
    pub poll_interval: Duration,

    /// Longest time to wait for the first workflow to appear
    pub discovery_timeout: Duration,
}

impl Config {
    /// Creates a configuration with default run settings
    pub fn new(project: ProjectSlug, token: String) -> Self {
        Self {
            base_url: "https://circleci.com".to_string(),
            project,
            token,
            branch: None,
            fetch_logs: true,
            workdir: PathBuf::from("."),
            poll_interval: Duration::from_secs(10),
            discovery_timeout: Duration::from_secs(30),
        }
    }

    /// Branch the pipeline is triggered on
    pub fn branch(&self) -> &str {
        resolve_branch(self.branch.as_deref())
    }

    /// Location of the persisted artifact map
    pub fn artifacts_path(&self) -> PathBuf {
        self.workdir.join(ARTIFACTS_FILE)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.project.org.is_empty() {
            anyhow::bail!("organization cannot be empty");
        }

        if self.project.repo.is_empty() {
            anyhow::bail!("repository cannot be empty");
        }

        if self.project.vcs.is_empty() {
            anyhow::bail!("vcs cannot be empty");
        }

        if self.token.is_empty() {
            anyhow::bail!("token cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new(
            ProjectSlug::new("gh", "acme", "widgets"),
            "token".to_string(),
        )
    }

    #[test]
    fn test_default_config() {
        let config = config();
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.discovery_timeout, Duration::from_secs(30));
        assert!(config.fetch_logs);
        assert_eq!(config.branch(), "main");
        assert_eq!(config.artifacts_path(), PathBuf::from("./artifacts.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_branch_uses_default() {
        let mut config = config();
        config.branch = Some(String::new());
        assert_eq!(config.branch(), "main");

        config.branch = Some("feature/x".to_string());
        assert_eq!(config.branch(), "feature/x");
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();

        config.token = String::new();
        assert!(config.validate().is_err());
        config.token = "token".to_string();

        config.project.org = String::new();
        assert!(config.validate().is_err());
        config.project.org = "acme".to_string();

        config.base_url = "circleci.com".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://circleci.com".to_string();

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_secs(1);

        assert!(config.validate().is_ok());
    }
}
