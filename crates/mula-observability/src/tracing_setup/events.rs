//! Structured log events for submission outcomes.
//!
//! Raw IP addresses never appear here; callers pass the short hash prefix.

use mula_core::models::{MulaTier, RejectReason};

pub fn submission_accepted(feedback_id: &str, tier: MulaTier, average: f64) {
    tracing::info!(
        event = "submission_accepted",
        feedback_id = %feedback_id,
        tier = %tier,
        average = average,
        "feedback accepted"
    );
}

pub fn submission_rejected(reason: RejectReason, ip_hash_prefix: &str) {
    tracing::info!(
        event = "submission_rejected",
        reason = reason.code(),
        ip_hash = %ip_hash_prefix,
        "feedback rejected"
    );
}

/// A storage or counter failure that forced a fail-closed denial.
pub fn eligibility_failed(stage: &str, error: &dyn std::fmt::Display) {
    tracing::error!(
        event = "eligibility_failed",
        stage = %stage,
        error = %error,
        "eligibility check failed, denying"
    );
}

/// Attempt bookkeeping failed after the outcome was decided.
pub fn attempt_record_failed(error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "attempt_record_failed",
        error = %error,
        "could not record submission attempt"
    );
}
