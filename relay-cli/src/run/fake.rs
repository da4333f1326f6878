//! Scripted in-memory CI service used by the run tests

use async_trait::async_trait;
use relay_client::{CiApi, ClientError, Result};
use relay_core::domain::artifact::Artifact;
use relay_core::domain::job::{Job, JobDetail, JobStatus};
use relay_core::domain::log::LogEntry;
use relay_core::domain::workflow::{Workflow, WorkflowStatus};
use relay_core::dto::pipeline::TriggerResponse;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

/// Fake CI service answering from canned data
///
/// Successive `list_pipeline_workflows` calls pop from a script; the last
/// listing is repeated once the script runs out.
#[derive(Default)]
pub struct ScriptedApi {
    trigger: Option<TriggerResponse>,
    trigger_error: Option<(u16, String)>,
    workflow_polls: Mutex<VecDeque<Vec<Workflow>>>,
    last_poll: Mutex<Vec<Workflow>>,
    jobs: HashMap<String, Vec<Job>>,
    artifacts: HashMap<u64, Vec<Artifact>>,
    failing_artifacts: HashSet<u64>,
    details: HashMap<u64, JobDetail>,
    outputs: HashMap<String, Vec<LogEntry>>,
    calls: Mutex<Vec<String>>,
    branches: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trigger(self, id: &str, number: u64) -> Self {
        self.with_trigger_response(TriggerResponse {
            id: Some(id.to_string()),
            number: Some(number),
        })
    }

    pub fn with_trigger_response(mut self, response: TriggerResponse) -> Self {
        self.trigger = Some(response);
        self
    }

    pub fn reject_trigger(mut self, status: u16, body: &str) -> Self {
        self.trigger_error = Some((status, body.to_string()));
        self
    }

    pub fn with_workflow_polls(self, polls: Vec<Vec<Workflow>>) -> Self {
        *self.workflow_polls.lock().unwrap() = polls.into();
        self
    }

    pub fn with_jobs(mut self, workflow_id: &str, jobs: Vec<Job>) -> Self {
        self.jobs.insert(workflow_id.to_string(), jobs);
        self
    }

    pub fn with_artifacts(mut self, job_number: u64, artifacts: Vec<Artifact>) -> Self {
        self.artifacts.insert(job_number, artifacts);
        self
    }

    /// Make artifact listing fail for the given job
    pub fn fail_artifacts(mut self, job_number: u64) -> Self {
        self.failing_artifacts.insert(job_number);
        self
    }

    pub fn with_detail(mut self, job_number: u64, detail: JobDetail) -> Self {
        self.details.insert(job_number, detail);
        self
    }

    pub fn with_output(mut self, url: &str, entries: Vec<LogEntry>) -> Self {
        self.outputs.insert(url.to_string(), entries);
        self
    }

    /// Number of calls made to the named operation
    pub fn calls(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == operation)
            .count()
    }

    pub fn triggered_branches(&self) -> Vec<String> {
        self.branches.lock().unwrap().clone()
    }

    fn record(&self, operation: &str) {
        self.calls.lock().unwrap().push(operation.to_string());
    }

    fn not_found(what: impl std::fmt::Display) -> ClientError {
        ClientError::api_error(404, format!("{what} not found"))
    }
}

#[async_trait]
impl CiApi for ScriptedApi {
    async fn trigger_pipeline(&self, branch: &str) -> Result<TriggerResponse> {
        self.record("trigger_pipeline");
        self.branches.lock().unwrap().push(branch.to_string());

        if let Some((status, body)) = &self.trigger_error {
            return Err(ClientError::api_error(*status, body.clone()));
        }
        Ok(self.trigger.clone().unwrap_or_default())
    }

    async fn list_pipeline_workflows(&self, _pipeline_id: &str) -> Result<Vec<Workflow>> {
        self.record("list_pipeline_workflows");

        let mut last = self.last_poll.lock().unwrap();
        if let Some(next) = self.workflow_polls.lock().unwrap().pop_front() {
            *last = next;
        }
        Ok(last.clone())
    }

    async fn get_workflow(&self, workflow_id: &str) -> Result<Workflow> {
        self.record("get_workflow");

        self.last_poll
            .lock()
            .unwrap()
            .iter()
            .find(|workflow| workflow.id == workflow_id)
            .cloned()
            .ok_or_else(|| Self::not_found(workflow_id))
    }

    async fn list_workflow_jobs(&self, workflow_id: &str) -> Result<Vec<Job>> {
        self.record("list_workflow_jobs");
        Ok(self.jobs.get(workflow_id).cloned().unwrap_or_default())
    }

    async fn list_job_artifacts(&self, job_number: u64) -> Result<Vec<Artifact>> {
        self.record("list_job_artifacts");
        if self.failing_artifacts.contains(&job_number) {
            return Err(ClientError::api_error(500, "artifact listing unavailable"));
        }
        Ok(self.artifacts.get(&job_number).cloned().unwrap_or_default())
    }

    async fn get_job_detail(&self, job_number: u64) -> Result<JobDetail> {
        self.record("get_job_detail");
        self.details
            .get(&job_number)
            .cloned()
            .ok_or_else(|| Self::not_found(job_number))
    }

    async fn get_action_output(&self, output_url: &str) -> Result<Vec<LogEntry>> {
        self.record("get_action_output");
        self.outputs
            .get(output_url)
            .cloned()
            .ok_or_else(|| Self::not_found(output_url))
    }
}

pub fn workflow(id: &str, status: WorkflowStatus) -> Workflow {
    Workflow {
        id: id.to_string(),
        name: format!("{id}-name"),
        status,
    }
}

pub fn job(name: &str, status: JobStatus, job_number: u64) -> Job {
    Job {
        name: name.to_string(),
        status,
        job_number: Some(job_number),
    }
}

pub fn artifact(path: &str, url: &str) -> Artifact {
    Artifact {
        path: path.to_string(),
        url: url.to_string(),
    }
}

pub fn log_entry(message: &str) -> LogEntry {
    serde_json::from_value(serde_json::json!({
        "type": "out",
        "time": "2024-03-01T12:30:45Z",
        "message": message,
    }))
    .unwrap()
}
