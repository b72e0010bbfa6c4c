//! Insert, get, list, toggle, and active-at lookups for review periods.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use mula_core::errors::{MulaError, MulaResult};
use mula_core::models::ReviewPeriod;

use crate::{fmt_ts, map_write_err, parse_ts, to_storage_err};

const COLUMNS: &str = "id, name, starts_at, ends_at, is_active, created_at";

struct RawPeriod {
    id: String,
    name: String,
    starts_at: String,
    ends_at: String,
    is_active: bool,
    created_at: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawPeriod> {
    Ok(RawPeriod {
        id: row.get(0)?,
        name: row.get(1)?,
        starts_at: row.get(2)?,
        ends_at: row.get(3)?,
        is_active: row.get::<_, i64>(4)? != 0,
        created_at: row.get(5)?,
    })
}

impl RawPeriod {
    fn into_period(self) -> MulaResult<ReviewPeriod> {
        Ok(ReviewPeriod {
            starts_at: parse_ts(&self.starts_at)?,
            ends_at: parse_ts(&self.ends_at)?,
            created_at: parse_ts(&self.created_at)?,
            id: self.id,
            name: self.name,
            is_active: self.is_active,
        })
    }
}

pub fn insert_period(conn: &Connection, period: &ReviewPeriod) -> MulaResult<()> {
    conn.execute(
        "INSERT INTO review_periods (id, name, starts_at, ends_at, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            period.id,
            period.name,
            fmt_ts(period.starts_at),
            fmt_ts(period.ends_at),
            period.is_active as i32,
            fmt_ts(period.created_at),
        ],
    )
    .map_err(map_write_err)?;
    Ok(())
}

pub fn get_period(conn: &Connection, id: &str) -> MulaResult<Option<ReviewPeriod>> {
    let raw = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM review_periods WHERE id = ?1"),
            params![id],
            read_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawPeriod::into_period).transpose()
}

pub fn list_periods(conn: &Connection) -> MulaResult<Vec<ReviewPeriod>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM review_periods ORDER BY starts_at DESC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.map(|r| {
        r.map_err(|e| to_storage_err(e.to_string()))
            .and_then(RawPeriod::into_period)
    })
    .collect()
}

pub fn set_active(conn: &Connection, id: &str, active: bool) -> MulaResult<()> {
    let updated = conn
        .execute(
            "UPDATE review_periods SET is_active = ?2 WHERE id = ?1",
            params![id, active as i32],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if updated == 0 {
        return Err(MulaError::PeriodNotFound { id: id.to_string() });
    }
    Ok(())
}

pub fn active_at(conn: &Connection, now: DateTime<Utc>) -> MulaResult<Option<ReviewPeriod>> {
    let raw = conn
        .query_row(
            &format!(
                "SELECT {COLUMNS} FROM review_periods
                 WHERE is_active = 1 AND starts_at <= ?1 AND ends_at >= ?1
                 ORDER BY starts_at DESC LIMIT 1"
            ),
            params![fmt_ts(now)],
            read_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawPeriod::into_period).transpose()
}
