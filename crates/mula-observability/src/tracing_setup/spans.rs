//! Span definitions for the submission path: eligibility, submission, classification.

/// Create an eligibility check span.
#[macro_export]
macro_rules! eligibility_span {
    ($target_user_id:expr, $review_period_id:expr) => {
        tracing::info_span!(
            "mula.eligibility",
            target_user_id = %$target_user_id,
            review_period_id = %$review_period_id
        )
    };
}

/// Create a submission span.
#[macro_export]
macro_rules! submission_span {
    ($target_user_id:expr, $review_period_id:expr) => {
        tracing::info_span!(
            "mula.submission",
            target_user_id = %$target_user_id,
            review_period_id = %$review_period_id
        )
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($feedback_id:expr) => {
        tracing::debug_span!("mula.classification", feedback_id = %$feedback_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ELIGIBILITY: &str = "mula.eligibility";
    pub const SUBMISSION: &str = "mula.submission";
    pub const CLASSIFICATION: &str = "mula.classification";
}
