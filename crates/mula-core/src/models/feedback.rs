use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Classification, MulaTier, RatingCategories};

/// Moderation state of a feedback record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    #[default]
    Approved,
    Flagged,
    Removed,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Flagged => "flagged",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "flagged" => Ok(Self::Flagged),
            "removed" => Ok(Self::Removed),
            other => Err(format!("unknown moderation status: {other}")),
        }
    }
}

/// One anonymous feedback record.
///
/// `tier` and `average` are derived from `ratings`; the storage layer
/// overwrites both on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: String,
    pub target_user_id: String,
    pub review_period_id: String,
    pub ratings: RatingCategories,
    pub strengths: String,
    pub improvements: String,
    pub tier: MulaTier,
    pub average: f64,
    pub is_visible: bool,
    pub moderation_status: ModerationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Build a fresh, visible, approved record stamped with `classification`.
    pub fn new(
        target_user_id: impl Into<String>,
        review_period_id: impl Into<String>,
        ratings: RatingCategories,
        strengths: impl Into<String>,
        improvements: impl Into<String>,
        classification: Classification,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            target_user_id: target_user_id.into(),
            review_period_id: review_period_id.into(),
            ratings,
            strengths: strengths.into(),
            improvements: improvements.into(),
            tier: classification.tier,
            average: classification.average,
            is_visible: true,
            moderation_status: ModerationStatus::Approved,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the record counts toward published results.
    pub fn is_published(&self) -> bool {
        self.is_visible && self.moderation_status != ModerationStatus::Removed
    }
}
