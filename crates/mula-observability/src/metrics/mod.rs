//! Submission outcome metrics.

pub mod submission_metrics;

pub use submission_metrics::{MetricsSnapshot, SubmissionMetrics};
