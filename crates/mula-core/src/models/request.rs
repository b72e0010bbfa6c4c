use std::fmt;

use super::{AttemptStatus, RejectReason};

/// Input to the eligibility gate.
///
/// Carries the raw reviewer IP; `Debug` redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct EligibilityRequest {
    pub fingerprint: String,
    pub ip_address: String,
    pub target_user_id: String,
    pub review_period_id: String,
}

impl EligibilityRequest {
    pub fn new(
        fingerprint: impl Into<String>,
        ip_address: impl Into<String>,
        target_user_id: impl Into<String>,
        review_period_id: impl Into<String>,
    ) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            ip_address: ip_address.into(),
            target_user_id: target_user_id.into(),
            review_period_id: review_period_id.into(),
        }
    }
}

impl fmt::Debug for EligibilityRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EligibilityRequest")
            .field("fingerprint", &self.fingerprint)
            .field("ip_address", &"<redacted>")
            .field("target_user_id", &self.target_user_id)
            .field("review_period_id", &self.review_period_id)
            .finish()
    }
}

/// Input to the attempt recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecordRequest {
    pub request: EligibilityRequest,
    pub status: AttemptStatus,
    pub block_reason: Option<RejectReason>,
}

impl AttemptRecordRequest {
    pub fn submitted(request: EligibilityRequest) -> Self {
        Self {
            request,
            status: AttemptStatus::Submitted,
            block_reason: None,
        }
    }

    pub fn rejected(request: EligibilityRequest, reason: RejectReason) -> Self {
        Self {
            request,
            status: AttemptStatus::for_rejection(reason),
            block_reason: Some(reason),
        }
    }
}
