//! v001: review_periods.

use rusqlite::Connection;

use mula_core::errors::MulaResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MulaResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS review_periods (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            starts_at   TEXT NOT NULL,
            ends_at     TEXT NOT NULL,
            is_active   INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_periods_window ON review_periods(starts_at, ends_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
