//! Versioned schema migrations, applied in order on open.

mod v001_review_periods;
mod v002_feedback;
mod v003_submission_attempts;

use rusqlite::{params, Connection};

use mula_core::errors::{MulaResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> MulaResult<()>;

/// All migrations, in version order.
const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_review_periods::migrate),
    (2, v002_feedback::migrate),
    (3, v003_submission_attempts::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 3;

/// Current schema version recorded in the database (0 for a fresh file).
pub fn current_version(conn: &Connection) -> MulaResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the recorded version. Each runs in its own transaction.
pub fn run_migrations(conn: &Connection) -> MulaResult<u32> {
    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("migration {version} begin: {e}")))?;
        let applied = migrate(&tx).and_then(|()| {
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![version],
            )
            .map_err(|e| to_storage_err(e.to_string()))
        });
        match applied {
            Ok(_) => tx.commit().map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?,
            Err(e) => {
                let _ = tx.rollback();
                return Err(StorageError::MigrationFailed {
                    version,
                    reason: e.to_string(),
                }
                .into());
            }
        }
        tracing::debug!(version, "applied schema migration");
    }
    Ok(LATEST_VERSION.max(current))
}
