//! v002: feedback.

use rusqlite::Connection;

use mula_core::errors::MulaResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MulaResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS feedback (
            id                TEXT PRIMARY KEY,
            target_user_id    TEXT NOT NULL,
            review_period_id  TEXT NOT NULL REFERENCES review_periods(id),
            ratings           TEXT NOT NULL,
            strengths         TEXT NOT NULL DEFAULT '',
            improvements      TEXT NOT NULL DEFAULT '',
            tier              TEXT NOT NULL,
            average           REAL NOT NULL,
            is_visible        INTEGER NOT NULL DEFAULT 1,
            moderation_status TEXT NOT NULL DEFAULT 'approved',
            created_at        TEXT NOT NULL,
            updated_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_feedback_target
            ON feedback(target_user_id, review_period_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
