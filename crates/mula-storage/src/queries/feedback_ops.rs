//! Insert, update, get, list, and moderation toggles for feedback records.
//!
//! These functions write exactly what they are given; tier stamping happens
//! in the engine before any of them is called.

use rusqlite::{params, Connection, OptionalExtension, Row};

use mula_core::errors::{MulaError, MulaResult};
use mula_core::models::{FeedbackRecord, ModerationStatus, MulaTier, RatingCategories};

use crate::{fmt_ts, map_write_err, parse_ts, to_storage_err};

const COLUMNS: &str = "id, target_user_id, review_period_id, ratings, strengths, improvements,
     tier, average, is_visible, moderation_status, created_at, updated_at";

struct RawFeedback {
    id: String,
    target_user_id: String,
    review_period_id: String,
    ratings: String,
    strengths: String,
    improvements: String,
    tier: String,
    average: f64,
    is_visible: bool,
    moderation_status: String,
    created_at: String,
    updated_at: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawFeedback> {
    Ok(RawFeedback {
        id: row.get(0)?,
        target_user_id: row.get(1)?,
        review_period_id: row.get(2)?,
        ratings: row.get(3)?,
        strengths: row.get(4)?,
        improvements: row.get(5)?,
        tier: row.get(6)?,
        average: row.get(7)?,
        is_visible: row.get::<_, i64>(8)? != 0,
        moderation_status: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

impl RawFeedback {
    fn into_record(self) -> MulaResult<FeedbackRecord> {
        let ratings: RatingCategories = serde_json::from_str(&self.ratings)?;
        let tier: MulaTier = self.tier.parse().map_err(to_storage_err)?;
        let moderation_status: ModerationStatus =
            self.moderation_status.parse().map_err(to_storage_err)?;
        Ok(FeedbackRecord {
            id: self.id,
            target_user_id: self.target_user_id,
            review_period_id: self.review_period_id,
            ratings,
            strengths: self.strengths,
            improvements: self.improvements,
            tier,
            average: self.average,
            is_visible: self.is_visible,
            moderation_status,
            created_at: parse_ts(&self.created_at)?,
            updated_at: parse_ts(&self.updated_at)?,
        })
    }
}

pub fn insert_feedback(conn: &Connection, feedback: &FeedbackRecord) -> MulaResult<()> {
    let ratings_json = serde_json::to_string(&feedback.ratings)?;
    conn.execute(
        &format!(
            "INSERT INTO feedback ({COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
        ),
        params![
            feedback.id,
            feedback.target_user_id,
            feedback.review_period_id,
            ratings_json,
            feedback.strengths,
            feedback.improvements,
            feedback.tier.as_str(),
            feedback.average,
            feedback.is_visible as i32,
            feedback.moderation_status.as_str(),
            fmt_ts(feedback.created_at),
            fmt_ts(feedback.updated_at),
        ],
    )
    .map_err(map_write_err)?;
    Ok(())
}

/// Overwrite the mutable fields of an existing record.
pub fn update_feedback(conn: &Connection, feedback: &FeedbackRecord) -> MulaResult<()> {
    let ratings_json = serde_json::to_string(&feedback.ratings)?;
    let updated = conn
        .execute(
            "UPDATE feedback SET
                ratings = ?2, strengths = ?3, improvements = ?4, tier = ?5, average = ?6,
                is_visible = ?7, moderation_status = ?8, updated_at = ?9
             WHERE id = ?1",
            params![
                feedback.id,
                ratings_json,
                feedback.strengths,
                feedback.improvements,
                feedback.tier.as_str(),
                feedback.average,
                feedback.is_visible as i32,
                feedback.moderation_status.as_str(),
                fmt_ts(feedback.updated_at),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if updated == 0 {
        return Err(MulaError::FeedbackNotFound {
            id: feedback.id.clone(),
        });
    }
    Ok(())
}

pub fn get_feedback(conn: &Connection, id: &str) -> MulaResult<Option<FeedbackRecord>> {
    let raw = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM feedback WHERE id = ?1"),
            params![id],
            read_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawFeedback::into_record).transpose()
}

pub fn list_feedback(
    conn: &Connection,
    target_user_id: &str,
    review_period_id: &str,
) -> MulaResult<Vec<FeedbackRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM feedback
             WHERE target_user_id = ?1 AND review_period_id = ?2
             ORDER BY created_at ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![target_user_id, review_period_id], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.map(|r| {
        r.map_err(|e| to_storage_err(e.to_string()))
            .and_then(RawFeedback::into_record)
    })
    .collect()
}

pub fn set_visibility(conn: &Connection, id: &str, visible: bool) -> MulaResult<()> {
    let updated = conn
        .execute(
            "UPDATE feedback SET is_visible = ?2 WHERE id = ?1",
            params![id, visible as i32],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if updated == 0 {
        return Err(MulaError::FeedbackNotFound { id: id.to_string() });
    }
    Ok(())
}

pub fn set_moderation_status(
    conn: &Connection,
    id: &str,
    status: ModerationStatus,
) -> MulaResult<()> {
    let updated = conn
        .execute(
            "UPDATE feedback SET moderation_status = ?2 WHERE id = ?1",
            params![id, status.as_str()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if updated == 0 {
        return Err(MulaError::FeedbackNotFound { id: id.to_string() });
    }
    Ok(())
}
