//! Data Transfer Objects
//!
//! Request and response shapes of the CI service API that do not map
//! one-to-one onto a domain type.

pub mod page;
pub mod pipeline;
