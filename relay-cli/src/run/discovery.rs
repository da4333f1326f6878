//! Workflow discovery
//!
//! A freshly triggered pipeline has no workflows until the service has
//! processed its configuration. Waiting for them is bounded: a pipeline that
//! never produces a workflow aborts the run.

use relay_client::CiApi;
use relay_core::domain::workflow::Workflow;
use std::time::Duration;
use tracing::{debug, info};

use super::error::{Result, RunError};

/// Poll until the pipeline lists at least one workflow
///
/// Polls immediately, then every `interval`, until `timeout` worth of
/// sleeping has passed. The returned set is final for the rest of the run.
pub async fn wait_for_workflows(
    api: &dyn CiApi,
    pipeline_id: &str,
    interval: Duration,
    timeout: Duration,
) -> Result<Vec<Workflow>> {
    let mut waited = Duration::ZERO;

    loop {
        let workflows = api.list_pipeline_workflows(pipeline_id).await?;

        if !workflows.is_empty() {
            info!(
                "Discovered {} workflow(s) for pipeline {}",
                workflows.len(),
                pipeline_id
            );
            for workflow in &workflows {
                info!("  - {} ({})", workflow.name, workflow.id);
            }
            return Ok(workflows);
        }

        if waited >= timeout {
            return Err(RunError::DiscoveryTimeout {
                pipeline_id: pipeline_id.to_string(),
                waited,
            });
        }

        let pause = interval.min(timeout - waited);
        debug!(
            "No workflows yet for pipeline {}, retrying in {:?}",
            pipeline_id, pause
        );
        tokio::time::sleep(pause).await;
        waited = waited.saturating_add(pause);
    }
}
