//! Shape validation for submitted and edited feedback.

use mula_core::constants::MAX_TEXT_LEN;
use mula_core::errors::{MulaError, MulaResult};
use mula_core::models::RatingCategories;

use crate::form::SubmissionForm;

pub fn validate_form(form: &SubmissionForm) -> MulaResult<()> {
    require_non_empty("target_user_id", &form.target_user_id)?;
    require_non_empty("review_period_id", &form.review_period_id)?;
    require_non_empty("fingerprint", &form.fingerprint)?;
    validate_content(&form.ratings, &form.strengths, &form.improvements)
}

/// Ratings in range and every free-text field within the length cap.
pub fn validate_content(
    ratings: &RatingCategories,
    strengths: &str,
    improvements: &str,
) -> MulaResult<()> {
    if let Some(category) = ratings.first_out_of_range() {
        return Err(MulaError::validation(
            format!("ratings.{}", category.as_str()),
            "score must be between 1 and 5",
        ));
    }
    for category in mula_core::models::Category::ALL {
        if let Some(comment) = &ratings.get(category).comment {
            require_max_len(&format!("ratings.{}.comment", category.as_str()), comment)?;
        }
    }
    require_max_len("strengths", strengths)?;
    require_max_len("improvements", improvements)
}

fn require_non_empty(field: &str, value: &str) -> MulaResult<()> {
    if value.trim().is_empty() {
        return Err(MulaError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_max_len(field: &str, value: &str) -> MulaResult<()> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(MulaError::validation(
            field,
            format!("must be at most {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(())
}
