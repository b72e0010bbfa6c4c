use crate::errors::MulaResult;
use crate::models::{FeedbackRecord, ModerationStatus, SubmissionAttempt};

/// Durable feedback records.
///
/// Implementations must recompute `tier` and `average` from `ratings` on every
/// write and return the record as stored.
pub trait IFeedbackStore: Send + Sync {
    fn create_feedback(&self, feedback: &FeedbackRecord) -> MulaResult<FeedbackRecord>;
    fn get_feedback(&self, id: &str) -> MulaResult<Option<FeedbackRecord>>;
    fn update_feedback(&self, feedback: &FeedbackRecord) -> MulaResult<FeedbackRecord>;

    fn list_feedback(
        &self,
        target_user_id: &str,
        review_period_id: &str,
    ) -> MulaResult<Vec<FeedbackRecord>>;

    fn set_visibility(&self, id: &str, visible: bool) -> MulaResult<()>;
    fn set_moderation_status(&self, id: &str, status: ModerationStatus) -> MulaResult<()>;

    /// Write the feedback and its `submitted` attempt atomically.
    ///
    /// Fails with `MulaError::DuplicateSubmission` when a `submitted` attempt
    /// already exists for the same (fingerprint, target, period); nothing is
    /// written in that case.
    fn create_with_attempt(
        &self,
        feedback: &FeedbackRecord,
        attempt: &SubmissionAttempt,
    ) -> MulaResult<FeedbackRecord>;
}
