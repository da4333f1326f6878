//! Core domain types
//!
//! These types mirror what the CI service reports about a triggered run.
//! They are produced by the client and consumed by the orchestrator, and
//! are never mutated after being read.

pub mod artifact;
pub mod job;
pub mod log;
pub mod pipeline;
pub mod workflow;
