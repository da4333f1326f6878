//! Relay Core
//!
//! Core types shared by the Relay client and CLI.
//!
//! This crate contains:
//! - Domain types: pipelines, workflows, jobs, artifacts and step logs
//! - DTOs: request/response shapes of the CI service API
//! - Outcome: the accumulated result of a run and its pass/fail reduction

pub mod domain;
pub mod dto;
pub mod outcome;
