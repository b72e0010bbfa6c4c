//! File-backed databases: data survives reopen, WAL mode, read pool routing.

use chrono::{Duration, TimeZone, Utc};

use mula_core::config::StorageConfig;
use mula_core::models::{
    AttemptStatus, FeedbackRecord, IpHasher, RatingCategories, ReviewPeriod, SubmissionAttempt,
};
use mula_core::traits::{IAttemptStore, IFeedbackStore, IPeriodStore};
use mula_storage::migrations::{current_version, LATEST_VERSION};
use mula_storage::pool::pragmas::verify_wal_mode;
use mula_storage::StorageEngine;

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mula.db");
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let (period_id, feedback_id) = {
        let engine = StorageEngine::open(&path).unwrap();
        let period = ReviewPeriod::new("Q1", now, now + Duration::days(30), now);
        engine.create_period(&period).unwrap();

        let ratings = RatingCategories::from_scores([5, 4, 5, 4, 5]);
        let record = FeedbackRecord::new(
            "alice",
            &period.id,
            ratings.clone(),
            "Great mentor",
            "",
            mula_rating::classify(&ratings),
            now,
        );
        let attempt = SubmissionAttempt::new(
            "fp-1",
            IpHasher::new("salt").hash("10.0.0.1"),
            "alice",
            &period.id,
            AttemptStatus::Submitted,
            None,
            now,
        );
        let stored = engine.create_with_attempt(&record, &attempt).unwrap();
        (period.id, stored.id)
    };

    let engine = StorageEngine::open(&path).unwrap();
    assert!(engine.get_period(&period_id).unwrap().is_some());
    let loaded = engine.get_feedback(&feedback_id).unwrap().unwrap();
    assert_eq!(loaded.strengths, "Great mentor");
    assert!(engine.has_submitted("fp-1", "alice", &period_id).unwrap());
}

#[test]
fn file_backed_engine_uses_wal_and_latest_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mula.db");
    let config = StorageConfig {
        read_pool_size: 2,
        ..StorageConfig::default()
    };
    let engine = StorageEngine::open_with_config(&path, &config).unwrap();

    let readers = engine.pool().readers.as_ref().unwrap();
    assert_eq!(readers.size(), 2);

    engine
        .pool()
        .writer
        .with_conn_sync(|conn| {
            assert!(verify_wal_mode(conn)?);
            assert_eq!(current_version(conn)?, LATEST_VERSION);
            Ok(())
        })
        .unwrap();
}

#[test]
fn reopening_does_not_reapply_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mula.db");
    drop(StorageEngine::open(&path).unwrap());
    let engine = StorageEngine::open(&path).unwrap();
    engine
        .pool()
        .writer
        .with_conn_sync(|conn| {
            let rows: i64 = conn
                .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
                .unwrap();
            assert_eq!(rows, i64::from(LATEST_VERSION));
            Ok(())
        })
        .unwrap();
}
