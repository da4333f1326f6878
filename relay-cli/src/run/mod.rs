//! Pipeline run
//!
//! Drives one pipeline run through its phases:
//!
//! ```text
//! Triggering -> Discovering -> Polling -> Walking -> Done
//! ```
//!
//! Each phase carries the typed values the next one needs, and every
//! transition is a single call into one of the submodules. Fatal errors
//! end the run from any phase.

mod completion;
mod discovery;
mod error;
#[cfg(test)]
mod fake;
mod store;
mod trigger;
mod walker;

use error::Result;
use store::ArtifactStore;

use relay_client::CiApi;
use relay_core::domain::pipeline::Pipeline;
use relay_core::domain::workflow::Workflow;
use relay_core::outcome::AggregateResult;
use tracing::{debug, info};

use crate::config::Config;
use walker::JobWalker;

/// Phase of a pipeline run
#[derive(Debug)]
enum RunPhase {
    Triggering,
    Discovering(Pipeline),
    Polling {
        pipeline: Pipeline,
        workflows: Vec<Workflow>,
    },
    Walking {
        pipeline: Pipeline,
        workflows: Vec<Workflow>,
    },
    Done(AggregateResult),
}

impl RunPhase {
    fn name(&self) -> &'static str {
        match self {
            RunPhase::Triggering => "triggering",
            RunPhase::Discovering(_) => "discovering",
            RunPhase::Polling { .. } => "polling",
            RunPhase::Walking { .. } => "walking",
            RunPhase::Done(_) => "done",
        }
    }
}

/// Runs a single pipeline end to end against a CI service
pub struct Orchestrator<'a> {
    api: &'a dyn CiApi,
    config: &'a Config,
    store: ArtifactStore,
}

impl<'a> Orchestrator<'a> {
    pub fn new(api: &'a dyn CiApi, config: &'a Config) -> Self {
        Self {
            api,
            config,
            store: ArtifactStore::new(config.artifacts_path()),
        }
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Run the pipeline to completion and return what was collected
    pub async fn run(&self) -> Result<AggregateResult> {
        let mut phase = RunPhase::Triggering;

        loop {
            debug!("Entering phase: {}", phase.name());
            phase = match phase {
                RunPhase::Done(result) => return Ok(result),
                phase => self.advance(phase).await?,
            };
        }
    }

    async fn advance(&self, phase: RunPhase) -> Result<RunPhase> {
        let next = match phase {
            RunPhase::Triggering => {
                let pipeline = trigger::trigger(self.api, self.config.branch()).await?;
                info!(
                    "Follow along at {}",
                    self.config.project.pipeline_url(pipeline.number)
                );
                RunPhase::Discovering(pipeline)
            }
            RunPhase::Discovering(pipeline) => {
                let workflows = discovery::wait_for_workflows(
                    self.api,
                    &pipeline.id,
                    self.config.poll_interval,
                    self.config.discovery_timeout,
                )
                .await?;
                RunPhase::Polling {
                    pipeline,
                    workflows,
                }
            }
            RunPhase::Polling {
                pipeline,
                workflows,
            } => {
                completion::wait_for_completion(
                    self.api,
                    &pipeline.id,
                    &workflows,
                    self.config.poll_interval,
                )
                .await?;
                RunPhase::Walking {
                    pipeline,
                    workflows,
                }
            }
            RunPhase::Walking {
                pipeline,
                workflows,
            } => {
                info!("Collecting results of pipeline #{}", pipeline.number);
                let walker = JobWalker::new(self.api, &self.store, self.config.fetch_logs);
                RunPhase::Done(walker.walk(&workflows).await?)
            }
            RunPhase::Done(_) => unreachable!("a finished run is never advanced"),
        };

        Ok(next)
    }
}
