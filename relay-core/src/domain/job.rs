//! Job domain types

use serde::{Deserialize, Serialize};

/// A job within a workflow
///
/// Snapshot read once while walking the workflow; never re-polled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub status: JobStatus,
    /// Build number; absent for approval and blocked jobs
    #[serde(default)]
    pub job_number: Option<u64>,
}

/// Job status as reported by the CI service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Success,
    Running,
    NotRun,
    Failed,
    Error,
    Retried,
    Queued,
    NotRunning,
    InfrastructureFail,
    Timedout,
    OnHold,
    #[serde(rename = "terminated-unknown")]
    TerminatedUnknown,
    Blocked,
    Canceled,
    Unauthorized,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Whether this status fails the whole run
    pub fn is_failure(self) -> bool {
        matches!(self, JobStatus::Failed | JobStatus::Error)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Success => "success",
            JobStatus::Running => "running",
            JobStatus::NotRun => "not_run",
            JobStatus::Failed => "failed",
            JobStatus::Error => "error",
            JobStatus::Retried => "retried",
            JobStatus::Queued => "queued",
            JobStatus::NotRunning => "not_running",
            JobStatus::InfrastructureFail => "infrastructure_fail",
            JobStatus::Timedout => "timedout",
            JobStatus::OnHold => "on_hold",
            JobStatus::TerminatedUnknown => "terminated-unknown",
            JobStatus::Blocked => "blocked",
            JobStatus::Canceled => "canceled",
            JobStatus::Unauthorized => "unauthorized",
            JobStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Detailed job record from the legacy API
///
/// Only the step tree is of interest; it is used to locate step logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(default)]
    pub steps: Option<Vec<Step>>,
}

/// A step of a job, made of one or more actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// A single action of a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub name: String,
    /// Where the action's log output can be downloaded from
    #[serde(default)]
    pub output_url: Option<String>,
}
