//! # mula-observability
//!
//! Tracing subscriber setup, span and event definitions for the submission
//! path, and lock-free counters of submission outcomes.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsSnapshot, SubmissionMetrics};
pub use tracing_setup::init_tracing;
