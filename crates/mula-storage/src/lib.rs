//! # mula-storage
//!
//! SQLite persistence for the feedback core: review periods, feedback
//! records, and the submission attempt history. One `StorageEngine` per
//! process, shared behind an `Arc`.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod retention;

pub use engine::StorageEngine;

use chrono::{DateTime, SecondsFormat, Utc};

use mula_core::errors::{MulaError, MulaResult, StorageError};

/// Wrap any message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> MulaError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}

/// Fixed-width UTC timestamp so lexical order matches time order.
pub(crate) fn fmt_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_ts(raw: &str) -> MulaResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {raw:?}: {e}")))
}

/// Only a UNIQUE index clash; primary key, foreign key and CHECK failures do not count.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Map a failed write, keeping constraint failures distinct from engine faults.
pub(crate) fn map_write_err(err: rusqlite::Error) -> MulaError {
    match err {
        rusqlite::Error::SqliteFailure(e, details)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StorageError::ConstraintViolation {
                details: details.unwrap_or_else(|| e.to_string()),
            }
            .into()
        }
        other => to_storage_err(other.to_string()),
    }
}
