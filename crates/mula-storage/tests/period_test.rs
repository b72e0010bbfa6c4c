//! Review period persistence: create, lookup, toggle, and active-at resolution.

use chrono::{DateTime, Duration, TimeZone, Utc};

use mula_core::errors::{MulaError, StorageError};
use mula_core::models::ReviewPeriod;
use mula_core::traits::IPeriodStore;
use mula_storage::StorageEngine;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

fn period(name: &str, start_days: i64, length_days: i64) -> ReviewPeriod {
    let start = t0() + Duration::days(start_days);
    ReviewPeriod::new(name, start, start + Duration::days(length_days), t0())
}

#[test]
fn create_then_get_roundtrips() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let p = period("Q1", 0, 30);
    engine.create_period(&p).unwrap();

    let loaded = engine.get_period(&p.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Q1");
    assert_eq!(loaded.starts_at, p.starts_at);
    assert_eq!(loaded.ends_at, p.ends_at);
    assert!(loaded.is_active);
}

#[test]
fn creating_the_same_period_twice_is_a_constraint_violation() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let p = period("Q1", 0, 30);
    engine.create_period(&p).unwrap();
    let err = engine.create_period(&p).unwrap_err();
    assert!(matches!(
        err,
        MulaError::StorageError(StorageError::ConstraintViolation { .. })
    ));
}

#[test]
fn get_unknown_period_is_none() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.get_period("missing").unwrap().is_none());
}

#[test]
fn list_orders_newest_start_first() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.create_period(&period("old", 0, 10)).unwrap();
    engine.create_period(&period("new", 20, 10)).unwrap();

    let names: Vec<String> = engine
        .list_periods()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["new".to_string(), "old".to_string()]);
}

#[test]
fn active_period_respects_window_and_flag() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let p = period("Q1", 0, 30);
    engine.create_period(&p).unwrap();

    let inside = t0() + Duration::days(5);
    assert_eq!(engine.active_period_at(inside).unwrap().unwrap().id, p.id);
    assert!(engine
        .active_period_at(t0() - Duration::seconds(1))
        .unwrap()
        .is_none());
    assert!(engine
        .active_period_at(t0() + Duration::days(31))
        .unwrap()
        .is_none());

    engine.set_period_active(&p.id, false).unwrap();
    assert!(engine.active_period_at(inside).unwrap().is_none());
}

#[test]
fn active_period_prefers_latest_start_when_overlapping() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.create_period(&period("long", 0, 60)).unwrap();
    let late = period("late", 10, 10);
    engine.create_period(&late).unwrap();

    let found = engine
        .active_period_at(t0() + Duration::days(12))
        .unwrap()
        .unwrap();
    assert_eq!(found.id, late.id);
}

#[test]
fn toggling_unknown_period_fails() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let err = engine.set_period_active("nope", true).unwrap_err();
    assert!(matches!(err, MulaError::PeriodNotFound { .. }));
}
