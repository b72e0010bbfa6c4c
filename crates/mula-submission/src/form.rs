use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mula_core::models::RatingCategories;

/// A reviewer's submitted form, as received from the web layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionForm {
    pub target_user_id: String,
    pub review_period_id: String,
    pub fingerprint: String,
    pub ratings: RatingCategories,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub improvements: String,
    /// Hidden field; humans leave it empty.
    #[serde(default)]
    pub honeypot: Option<String>,
    /// Client-reported time the form was rendered.
    pub form_loaded_at: DateTime<Utc>,
}
