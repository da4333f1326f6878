//! The CI service seam
//!
//! Everything the orchestrator asks of the remote service goes through
//! [`CiApi`]. [`CircleClient`] is the HTTP implementation.

use async_trait::async_trait;
use relay_core::domain::artifact::Artifact;
use relay_core::domain::job::{Job, JobDetail};
use relay_core::domain::log::LogEntry;
use relay_core::domain::workflow::Workflow;
use relay_core::dto::pipeline::TriggerResponse;

use crate::CircleClient;
use crate::error::Result;

/// Operations consumed from the CI service
#[async_trait]
pub trait CiApi: Send + Sync {
    /// Start a pipeline on `branch`
    async fn trigger_pipeline(&self, branch: &str) -> Result<TriggerResponse>;

    /// List all workflows a pipeline has produced so far
    async fn list_pipeline_workflows(&self, pipeline_id: &str) -> Result<Vec<Workflow>>;

    /// Read a single workflow
    async fn get_workflow(&self, workflow_id: &str) -> Result<Workflow>;

    /// List the jobs of a workflow
    async fn list_workflow_jobs(&self, workflow_id: &str) -> Result<Vec<Job>>;

    /// List the artifacts of a job
    async fn list_job_artifacts(&self, job_number: u64) -> Result<Vec<Artifact>>;

    /// Read the detailed job record holding the step tree
    async fn get_job_detail(&self, job_number: u64) -> Result<JobDetail>;

    /// Download the log output of a step action
    async fn get_action_output(&self, output_url: &str) -> Result<Vec<LogEntry>>;
}

#[async_trait]
impl CiApi for CircleClient {
    async fn trigger_pipeline(&self, branch: &str) -> Result<TriggerResponse> {
        CircleClient::trigger_pipeline(self, branch).await
    }

    async fn list_pipeline_workflows(&self, pipeline_id: &str) -> Result<Vec<Workflow>> {
        CircleClient::list_pipeline_workflows(self, pipeline_id).await
    }

    async fn get_workflow(&self, workflow_id: &str) -> Result<Workflow> {
        CircleClient::get_workflow(self, workflow_id).await
    }

    async fn list_workflow_jobs(&self, workflow_id: &str) -> Result<Vec<Job>> {
        CircleClient::list_workflow_jobs(self, workflow_id).await
    }

    async fn list_job_artifacts(&self, job_number: u64) -> Result<Vec<Artifact>> {
        CircleClient::list_job_artifacts(self, job_number).await
    }

    async fn get_job_detail(&self, job_number: u64) -> Result<JobDetail> {
        CircleClient::get_job_detail(self, job_number).await
    }

    async fn get_action_output(&self, output_url: &str) -> Result<Vec<LogEntry>> {
        CircleClient::get_action_output(self, output_url).await
    }
}
