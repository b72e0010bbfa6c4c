use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IpHash, RejectReason};

/// Outcome recorded for one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Submitted,
    Blocked,
    RateLimited,
}

impl AttemptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Blocked => "blocked",
            Self::RateLimited => "rate_limited",
        }
    }

    /// Status to record for a gate rejection.
    pub fn for_rejection(reason: RejectReason) -> Self {
        if reason.is_rate_limit() {
            Self::RateLimited
        } else {
            Self::Blocked
        }
    }
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttemptStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(Self::Submitted),
            "blocked" => Ok(Self::Blocked),
            "rate_limited" => Ok(Self::RateLimited),
            other => Err(format!("unknown attempt status: {other}")),
        }
    }
}

/// Immutable audit record of one feedback-submission try.
///
/// Only the IP hash is ever stored; there is no field that can hold a raw address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAttempt {
    pub id: String,
    pub fingerprint: String,
    pub ip_hash: IpHash,
    pub target_user_id: String,
    pub review_period_id: String,
    pub status: AttemptStatus,
    pub block_reason: Option<RejectReason>,
    pub created_at: DateTime<Utc>,
}

impl SubmissionAttempt {
    pub fn new(
        fingerprint: impl Into<String>,
        ip_hash: IpHash,
        target_user_id: impl Into<String>,
        review_period_id: impl Into<String>,
        status: AttemptStatus,
        block_reason: Option<RejectReason>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            fingerprint: fingerprint.into(),
            ip_hash,
            target_user_id: target_user_id.into(),
            review_period_id: review_period_id.into(),
            status,
            block_reason,
            created_at,
        }
    }
}
