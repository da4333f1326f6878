//! Pipeline DTOs

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::Pipeline;

/// Request to trigger a pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerPipeline {
    pub branch: String,
}

/// Response to a trigger request
///
/// Fields are optional on the wire; [`TriggerResponse::into_pipeline`]
/// enforces that both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
}

/// A required response field was absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing field `{}`", self.0)
    }
}

impl std::error::Error for MissingField {}

impl TriggerResponse {
    pub fn into_pipeline(self, branch: &str) -> Result<Pipeline, MissingField> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or(MissingField("id"))?;
        let number = self.number.ok_or(MissingField("number"))?;

        Ok(Pipeline {
            id,
            number,
            branch: branch.to_string(),
        })
    }
}
