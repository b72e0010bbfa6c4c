//! v003: submission_attempts.
//!
//! The partial unique index allows at most one `submitted` row per
//! (fingerprint, target, period); blocked and rate-limited rows are unconstrained.

use rusqlite::Connection;

use mula_core::errors::MulaResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MulaResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS submission_attempts (
            id                TEXT PRIMARY KEY,
            fingerprint       TEXT NOT NULL,
            ip_hash           TEXT NOT NULL,
            target_user_id    TEXT NOT NULL,
            review_period_id  TEXT NOT NULL,
            status            TEXT NOT NULL,
            block_reason      TEXT,
            created_at        TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS uq_attempts_submitted
            ON submission_attempts(fingerprint, target_user_id, review_period_id)
            WHERE status = 'submitted';
        CREATE INDEX IF NOT EXISTS idx_attempts_ip ON submission_attempts(ip_hash, created_at);
        CREATE INDEX IF NOT EXISTS idx_attempts_fingerprint
            ON submission_attempts(fingerprint, created_at);
        CREATE INDEX IF NOT EXISTS idx_attempts_created ON submission_attempts(created_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
