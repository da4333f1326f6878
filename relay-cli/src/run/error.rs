//! Errors that abort a run

use relay_client::ClientError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for run operations
pub type Result<T> = std::result::Result<T, RunError>;

/// Fatal conditions; each one stops the run immediately
#[derive(Debug, Error)]
pub enum RunError {
    /// The trigger request was rejected
    #[error("Failed to trigger pipeline (status {status}): {body}")]
    Trigger { status: u16, body: String },

    /// The trigger response lacked a required field
    #[error("Malformed trigger response: {0}")]
    MalformedResponse(String),

    /// The pipeline never produced a workflow
    #[error("No workflows appeared for pipeline {pipeline_id} after {waited:?}")]
    DiscoveryTimeout {
        pipeline_id: String,
        waited: Duration,
    },

    /// Any other failed request to the CI service
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The artifact map could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
