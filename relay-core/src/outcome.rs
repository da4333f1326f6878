//! Run outcome
//!
//! Accumulated state of a run and the reduction of job statuses into a
//! single pass/fail result. The state only ever grows: artifacts are never
//! removed and the failure flag is never cleared.

use crate::domain::artifact::ArtifactMap;
use crate::domain::job::JobStatus;

/// Everything collected while walking a pipeline's jobs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateResult {
    artifacts: ArtifactMap,
    failed: bool,
}

impl AggregateResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observed job status. Returns whether the run is now failed.
    pub fn record_status(&mut self, status: JobStatus) -> bool {
        if status.is_failure() {
            self.failed = true;
        }
        self.failed
    }

    /// Merge one job's artifacts. Returns the number of paths added.
    pub fn merge_artifacts(&mut self, job_artifacts: ArtifactMap) -> usize {
        self.artifacts.merge(job_artifacts)
    }

    pub fn artifacts(&self) -> &ArtifactMap {
        &self.artifacts
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn outcome(&self) -> Outcome {
        if self.failed {
            Outcome::Failed
        } else {
            Outcome::Passed
        }
    }
}

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }
}
