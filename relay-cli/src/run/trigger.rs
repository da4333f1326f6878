//! Pipeline trigger

use relay_client::{CiApi, ClientError};
use relay_core::domain::pipeline::Pipeline;
use tracing::info;

use super::error::{Result, RunError};

/// Start a pipeline on `branch`
///
/// Sent once with no retry. A rejected request or a response without an
/// id and number aborts the run.
pub async fn trigger(api: &dyn CiApi, branch: &str) -> Result<Pipeline> {
    let response = match api.trigger_pipeline(branch).await {
        Ok(response) => response,
        Err(ClientError::ApiError { status, message }) => {
            return Err(RunError::Trigger {
                status,
                body: message,
            });
        }
        Err(ClientError::ParseError(message)) => {
            return Err(RunError::MalformedResponse(message));
        }
        Err(e) => return Err(e.into()),
    };

    let pipeline = response
        .into_pipeline(branch)
        .map_err(|e| RunError::MalformedResponse(e.to_string()))?;

    info!(
        "Triggered pipeline #{} ({}) on branch {}",
        pipeline.number, pipeline.id, pipeline.branch
    );

    Ok(pipeline)
}
