//! Pipeline-related API endpoints

use relay_core::dto::pipeline::{TriggerPipeline, TriggerResponse};
use tracing::debug;

use crate::CircleClient;
use crate::error::Result;

impl CircleClient {
    /// Trigger a new pipeline on a branch
    ///
    /// Sent exactly once; a rejected trigger surfaces as
    /// [`ClientError::ApiError`](crate::ClientError::ApiError) with the raw body.
    pub async fn trigger_pipeline(&self, branch: &str) -> Result<TriggerResponse> {
        let path = format!("/project/{}/pipeline", self.project.v2());
        debug!("Triggering pipeline on {} ({})", self.project, branch);

        let response = self
            .post(&path)
            .json(&TriggerPipeline {
                branch: branch.to_string(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }
}
