//! Completion polling
//!
//! Unlike discovery, this wait has no ceiling: a running pipeline may
//! legitimately take as long as it takes.

use relay_client::CiApi;
use relay_core::domain::workflow::Workflow;
use std::time::Duration;
use tracing::info;

use super::error::Result;

/// Poll until every discovered workflow has reached a terminal status
///
/// Each poll re-reads the pipeline's whole workflow list in one call.
/// Workflows that appear after discovery are ignored.
pub async fn wait_for_completion(
    api: &dyn CiApi,
    pipeline_id: &str,
    workflows: &[Workflow],
    interval: Duration,
) -> Result<()> {
    let total = workflows.len();

    loop {
        let current = api.list_pipeline_workflows(pipeline_id).await?;
        let finished = count_finished(workflows, &current);

        if finished == total {
            info!("All {} workflow(s) finished", total);
            return Ok(());
        }

        info!(
            "{}/{} workflow(s) finished, checking again in {:?}",
            finished, total, interval
        );
        tokio::time::sleep(interval).await;
    }
}

/// Count discovered workflows whose current status is terminal
fn count_finished(discovered: &[Workflow], current: &[Workflow]) -> usize {
    discovered
        .iter()
        .filter(|known| {
            current
                .iter()
                .any(|workflow| workflow.id == known.id && workflow.status.is_terminal())
        })
        .count()
}
