use serde::{Deserialize, Serialize};

use mula_core::models::{MulaTier, RejectReason};
use mula_rating::{Badge, FeedbackSummary};

/// What the reviewer is told after submitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Accepted {
        feedback_id: String,
        tier: MulaTier,
        average: f64,
    },
    Rejected {
        reason: RejectReason,
        message: String,
    },
}

impl SubmissionOutcome {
    pub(crate) fn rejected(reason: RejectReason, message: Option<String>) -> Self {
        Self::Rejected {
            reason,
            message: message.unwrap_or_else(|| reason.message(None)),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected { reason, .. } => Some(*reason),
            Self::Accepted { .. } => None,
        }
    }
}

/// Published results for one target in one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsView {
    pub summary: FeedbackSummary,
    pub badges: Vec<Badge>,
}
