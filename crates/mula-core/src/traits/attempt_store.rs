use chrono::{DateTime, Utc};

use crate::errors::MulaResult;
use crate::models::{IpHash, SubmissionAttempt};

/// Identity an attempt-history window is keyed by.
#[derive(Debug, Clone, Copy)]
pub enum AttemptScope<'a> {
    Ip(&'a IpHash),
    Fingerprint(&'a str),
}

/// Append-only submission attempt history.
pub trait IAttemptStore: Send + Sync {
    fn insert_attempt(&self, attempt: &SubmissionAttempt) -> MulaResult<()>;

    /// Whether a `submitted` attempt exists for the (fingerprint, target, period) triple.
    fn has_submitted(
        &self,
        fingerprint: &str,
        target_user_id: &str,
        review_period_id: &str,
    ) -> MulaResult<bool>;

    /// Timestamps of `submitted` attempts in `scope` strictly after `since`, oldest first.
    fn submitted_since(
        &self,
        scope: AttemptScope<'_>,
        since: DateTime<Utc>,
    ) -> MulaResult<Vec<DateTime<Utc>>>;

    fn list_attempts_for_target(
        &self,
        target_user_id: &str,
        review_period_id: &str,
    ) -> MulaResult<Vec<SubmissionAttempt>>;

    /// Delete attempts created before `cutoff`. Returns the number removed.
    fn purge_attempts_before(&self, cutoff: DateTime<Utc>) -> MulaResult<usize>;
}
