//! Job tree walker
//!
//! Visits every job of every discovered workflow, one at a time in listing
//! order, and folds what it sees into an [`AggregateResult`]:
//! job statuses feed the failure flag, artifacts feed the artifact map, and
//! step logs are printed when enabled.

use relay_client::CiApi;
use relay_core::domain::artifact::ArtifactMap;
use relay_core::domain::job::Job;
use relay_core::domain::workflow::Workflow;
use relay_core::outcome::AggregateResult;
use tracing::{debug, info, warn};

use super::error::Result;
use super::store::ArtifactStore;
use crate::report;

/// Walks workflows and jobs, accumulating the run result
pub struct JobWalker<'a> {
    api: &'a dyn CiApi,
    store: &'a ArtifactStore,
    fetch_logs: bool,
}

impl<'a> JobWalker<'a> {
    pub fn new(api: &'a dyn CiApi, store: &'a ArtifactStore, fetch_logs: bool) -> Self {
        Self {
            api,
            store,
            fetch_logs,
        }
    }

    /// Walk all workflows and return the accumulated result
    pub async fn walk(&self, workflows: &[Workflow]) -> Result<AggregateResult> {
        let mut result = AggregateResult::new();

        for workflow in workflows {
            self.walk_workflow(workflow, &mut result).await?;
        }

        self.store.save(result.artifacts()).await?;
        Ok(result)
    }

    async fn walk_workflow(&self, workflow: &Workflow, result: &mut AggregateResult) -> Result<()> {
        // Informational only; the outcome is decided by job statuses
        match self.api.get_workflow(&workflow.id).await {
            Ok(current) => info!(
                "Workflow {} ({}) finished with status {}",
                current.name, current.id, current.status
            ),
            Err(e) => warn!("Failed to refresh workflow {}: {}", workflow.id, e),
        }

        let jobs = self.api.list_workflow_jobs(&workflow.id).await?;
        debug!("Workflow {} has {} job(s)", workflow.id, jobs.len());

        for job in &jobs {
            self.walk_job(job, result).await?;
            self.store.save(result.artifacts()).await?;
        }

        Ok(())
    }

    async fn walk_job(&self, job: &Job, result: &mut AggregateResult) -> Result<()> {
        result.record_status(job.status);
        if job.status.is_failure() {
            warn!("Job {} finished with status {}", job.name, job.status);
        } else {
            info!("Job {} finished with status {}", job.name, job.status);
        }

        let Some(job_number) = job.job_number else {
            info!("Job {} has no job number, skipping artifacts and logs", job.name);
            return Ok(());
        };

        let artifacts = self.api.list_job_artifacts(job_number).await?;
        let added = result.merge_artifacts(ArtifactMap::from_artifacts(&artifacts));
        debug!(
            "Job {} listed {} artifact(s), {} new",
            job.name,
            artifacts.len(),
            added
        );

        if self.fetch_logs {
            self.print_step_logs(job, job_number).await;
        }

        Ok(())
    }

    /// Print the first log line of every step action
    ///
    /// Nothing here can fail the run. Returns the number of lines printed.
    async fn print_step_logs(&self, job: &Job, job_number: u64) -> usize {
        let detail = match self.api.get_job_detail(job_number).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Failed to fetch details of job {}: {}", job.name, e);
                return 0;
            }
        };

        let Some(steps) = detail.steps else {
            info!("Job {} has no steps", job.name);
            return 0;
        };

        let mut printed = 0;
        for step in &steps {
            for action in &step.actions {
                let Some(output_url) = action.output_url.as_deref() else {
                    info!("Step {} of job {} has no output", step.name, job.name);
                    continue;
                };

                match self.api.get_action_output(output_url).await {
                    Ok(entries) => match entries.first() {
                        Some(entry) => {
                            report::print_step_log(&job.name, &step.name, entry);
                            printed += 1;
                        }
                        None => info!("Step {} of job {} logged nothing", step.name, job.name),
                    },
                    Err(e) => warn!(
                        "Failed to fetch output of step {} of job {}: {}",
                        step.name, job.name, e
                    ),
                }
            }
        }

        printed
    }
}
