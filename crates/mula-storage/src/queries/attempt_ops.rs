//! Append, lookup, window, and purge operations for submission attempts.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use mula_core::errors::{MulaError, MulaResult};
use mula_core::models::{AttemptStatus, IpHash, RejectReason, SubmissionAttempt};
use mula_core::traits::AttemptScope;

use crate::{fmt_ts, is_unique_violation, map_write_err, parse_ts, to_storage_err};

struct RawAttempt {
    id: String,
    fingerprint: String,
    ip_hash: String,
    target_user_id: String,
    review_period_id: String,
    status: String,
    block_reason: Option<String>,
    created_at: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawAttempt> {
    Ok(RawAttempt {
        id: row.get(0)?,
        fingerprint: row.get(1)?,
        ip_hash: row.get(2)?,
        target_user_id: row.get(3)?,
        review_period_id: row.get(4)?,
        status: row.get(5)?,
        block_reason: row.get(6)?,
        created_at: row.get(7)?,
    })
}

impl RawAttempt {
    fn into_attempt(self) -> MulaResult<SubmissionAttempt> {
        let status: AttemptStatus = self.status.parse().map_err(to_storage_err)?;
        let block_reason = self
            .block_reason
            .as_deref()
            .map(str::parse::<RejectReason>)
            .transpose()
            .map_err(to_storage_err)?;
        Ok(SubmissionAttempt {
            id: self.id,
            fingerprint: self.fingerprint,
            ip_hash: IpHash::from_stored(self.ip_hash),
            target_user_id: self.target_user_id,
            review_period_id: self.review_period_id,
            status,
            block_reason,
            created_at: parse_ts(&self.created_at)?,
        })
    }
}

/// Insert one attempt. A second `submitted` row for the same triple is a
/// `DuplicateSubmission`.
pub fn insert_attempt(conn: &Connection, attempt: &SubmissionAttempt) -> MulaResult<()> {
    conn.execute(
        "INSERT INTO submission_attempts (
            id, fingerprint, ip_hash, target_user_id, review_period_id,
            status, block_reason, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            attempt.id,
            attempt.fingerprint,
            attempt.ip_hash.as_str(),
            attempt.target_user_id,
            attempt.review_period_id,
            attempt.status.as_str(),
            attempt.block_reason.map(|r| r.code()),
            fmt_ts(attempt.created_at),
        ],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            MulaError::DuplicateSubmission {
                target_user_id: attempt.target_user_id.clone(),
                review_period_id: attempt.review_period_id.clone(),
            }
        } else {
            map_write_err(e)
        }
    })?;
    Ok(())
}

pub fn has_submitted(
    conn: &Connection,
    fingerprint: &str,
    target_user_id: &str,
    review_period_id: &str,
) -> MulaResult<bool> {
    conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM submission_attempts
            WHERE fingerprint = ?1 AND target_user_id = ?2 AND review_period_id = ?3
              AND status = 'submitted'
        )",
        params![fingerprint, target_user_id, review_period_id],
        |row| row.get::<_, i64>(0),
    )
    .map(|found| found != 0)
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn submitted_since(
    conn: &Connection,
    scope: AttemptScope<'_>,
    since: DateTime<Utc>,
) -> MulaResult<Vec<DateTime<Utc>>> {
    let (column, value) = match scope {
        AttemptScope::Ip(hash) => ("ip_hash", hash.as_str()),
        AttemptScope::Fingerprint(fp) => ("fingerprint", fp),
    };
    let mut stmt = conn
        .prepare(&format!(
            "SELECT created_at FROM submission_attempts
             WHERE {column} = ?1 AND status = 'submitted' AND created_at > ?2
             ORDER BY created_at ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![value, fmt_ts(since)], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.map(|r| {
        r.map_err(|e| to_storage_err(e.to_string()))
            .and_then(|raw| parse_ts(&raw))
    })
    .collect()
}

pub fn list_for_target(
    conn: &Connection,
    target_user_id: &str,
    review_period_id: &str,
) -> MulaResult<Vec<SubmissionAttempt>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, fingerprint, ip_hash, target_user_id, review_period_id,
                    status, block_reason, created_at
             FROM submission_attempts
             WHERE target_user_id = ?1 AND review_period_id = ?2
             ORDER BY created_at ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![target_user_id, review_period_id], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.map(|r| {
        r.map_err(|e| to_storage_err(e.to_string()))
            .and_then(RawAttempt::into_attempt)
    })
    .collect()
}

/// Delete attempts created strictly before `cutoff`.
pub fn purge_before(conn: &Connection, cutoff: DateTime<Utc>) -> MulaResult<usize> {
    conn.execute(
        "DELETE FROM submission_attempts WHERE created_at < ?1",
        params![fmt_ts(cutoff)],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
