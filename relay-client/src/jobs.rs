//! Job-related API endpoints
//!
//! Jobs are listed through the v2 API, but their step tree is only exposed
//! by the legacy v1.1 API, which authenticates with a `circle-token` query
//! parameter. Step log output lives at pre-signed URLs that take no
//! credentials at all.

use relay_core::domain::artifact::Artifact;
use relay_core::domain::job::{Job, JobDetail};
use relay_core::domain::log::LogEntry;

use crate::CircleClient;
use crate::error::Result;

impl CircleClient {
    // =============================================================================
    // Jobs
    // =============================================================================

    /// List every job of a workflow, following pagination
    pub async fn list_workflow_jobs(&self, workflow_id: &str) -> Result<Vec<Job>> {
        self.list_all(&format!("/workflow/{}/job", workflow_id))
            .await
    }

    /// Get the legacy detail record of a job, including its steps
    pub async fn get_job_detail(&self, job_number: u64) -> Result<JobDetail> {
        let url = format!(
            "{}/api/v1.1/project/{}/{}",
            self.base_url,
            self.project.legacy(),
            job_number
        );
        let response = self
            .client
            .get(&url)
            .query(&[("circle-token", &self.token)])
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Artifacts & Logs
    // =============================================================================

    /// List every artifact produced by a job, following pagination
    pub async fn list_job_artifacts(&self, job_number: u64) -> Result<Vec<Artifact>> {
        self.list_all(&format!(
            "/project/{}/{}/artifacts",
            self.project.v2(),
            job_number
        ))
        .await
    }

    /// Download the log output of a step action
    pub async fn get_action_output(&self, output_url: &str) -> Result<Vec<LogEntry>> {
        let response = self.client.get(output_url).send().await?;

        self.handle_response(response).await
    }
}
