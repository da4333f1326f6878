//! Pipeline domain types

use serde::{Deserialize, Serialize};

/// Branch used when none (or an empty one) is supplied
pub const DEFAULT_BRANCH: &str = "main";

/// A triggered pipeline run
///
/// Created once by the trigger and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: String,
    pub number: u64,
    pub branch: String,
}

/// Resolve the branch to trigger, falling back to [`DEFAULT_BRANCH`]
pub fn resolve_branch(branch: Option<&str>) -> &str {
    match branch {
        Some(branch) if !branch.trim().is_empty() => branch,
        _ => DEFAULT_BRANCH,
    }
}

/// Coordinates of a project on the CI service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSlug {
    /// Short VCS name ("gh" or "bb")
    pub vcs: String,
    pub org: String,
    pub repo: String,
}

impl ProjectSlug {
    pub fn new(vcs: impl Into<String>, org: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            vcs: vcs.into(),
            org: org.into(),
            repo: repo.into(),
        }
    }

    /// Slug used by the v2 API, e.g. `gh/acme/widgets`
    pub fn v2(&self) -> String {
        format!("{}/{}/{}", self.vcs, self.org, self.repo)
    }

    /// Path used by the legacy v1.1 API, e.g. `github/acme/widgets`
    pub fn legacy(&self) -> String {
        let vcs = match self.vcs.as_str() {
            "gh" => "github",
            "bb" => "bitbucket",
            other => other,
        };
        format!("{}/{}/{}", vcs, self.org, self.repo)
    }

    /// Web UI location of a pipeline run
    pub fn pipeline_url(&self, number: u64) -> String {
        format!("https://app.circleci.com/pipelines/{}/{}", self.v2(), number)
    }
}

impl std::fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.v2())
    }
}
