//! Attempts older than the retention horizon → permanent delete.

use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;

use mula_core::errors::{ConfigError, MulaResult};

use crate::queries::attempt_ops;

/// Delete attempts created more than `retention_days` before `now`.
pub fn purge_expired_attempts(
    conn: &Connection,
    retention_days: u32,
    now: DateTime<Utc>,
) -> MulaResult<usize> {
    let cutoff = Duration::try_days(i64::from(retention_days))
        .and_then(|span| now.checked_sub_signed(span))
        .ok_or_else(|| ConfigError::ValidationFailed {
            field: "retention.attempt_retention_days".to_string(),
            message: format!("{retention_days} days is out of range"),
        })?;
    let removed = attempt_ops::purge_before(conn, cutoff)?;
    tracing::info!(removed, %cutoff, "purged expired submission attempts");
    Ok(removed)
}
