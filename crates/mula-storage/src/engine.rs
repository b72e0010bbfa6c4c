//! StorageEngine: owns the ConnectionPool and implements the attempt, feedback,
//! and period stores.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use mula_core::config::{RetentionConfig, StorageConfig};
use mula_core::errors::MulaResult;
use mula_core::models::{FeedbackRecord, ModerationStatus, ReviewPeriod, SubmissionAttempt};
use mula_core::traits::{AttemptScope, IAttemptStore, IFeedbackStore, IPeriodStore};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{attempt_ops, feedback_ops, period_ops};
use crate::to_storage_err;

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default pool settings.
    pub fn open(path: &Path) -> MulaResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine using the pool size and busy timeout from `config`.
    /// `config.db_path` is ignored in favour of `path`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> MulaResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> MulaResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> MulaResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            let version = migrations::run_migrations(conn)?;
            tracing::debug!(schema_version = version, "storage initialized");
            Ok(())
        })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Run a read-only closure. File-backed engines use the read pool;
    /// in-memory engines go through the writer.
    fn with_reader<F, T>(&self, f: F) -> MulaResult<T>
    where
        F: FnOnce(&Connection) -> MulaResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn_sync(f),
        }
    }

    /// Delete attempts older than the configured retention horizon.
    pub fn purge_expired_attempts(
        &self,
        config: &RetentionConfig,
        now: DateTime<Utc>,
    ) -> MulaResult<usize> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::retention::purge_expired_attempts(conn, config.attempt_retention_days, now)
        })
    }
}

/// Recompute tier and average from the ratings about to be written.
fn stamped(feedback: &FeedbackRecord) -> FeedbackRecord {
    let classification = mula_rating::classify(&feedback.ratings);
    FeedbackRecord {
        tier: classification.tier,
        average: classification.average,
        ..feedback.clone()
    }
}

impl IAttemptStore for StorageEngine {
    fn insert_attempt(&self, attempt: &SubmissionAttempt) -> MulaResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| attempt_ops::insert_attempt(conn, attempt))
    }

    fn has_submitted(
        &self,
        fingerprint: &str,
        target_user_id: &str,
        review_period_id: &str,
    ) -> MulaResult<bool> {
        self.with_reader(|conn| {
            attempt_ops::has_submitted(conn, fingerprint, target_user_id, review_period_id)
        })
    }

    fn submitted_since(
        &self,
        scope: AttemptScope<'_>,
        since: DateTime<Utc>,
    ) -> MulaResult<Vec<DateTime<Utc>>> {
        self.with_reader(|conn| attempt_ops::submitted_since(conn, scope, since))
    }

    fn list_attempts_for_target(
        &self,
        target_user_id: &str,
        review_period_id: &str,
    ) -> MulaResult<Vec<SubmissionAttempt>> {
        self.with_reader(|conn| {
            attempt_ops::list_for_target(conn, target_user_id, review_period_id)
        })
    }

    fn purge_attempts_before(&self, cutoff: DateTime<Utc>) -> MulaResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| attempt_ops::purge_before(conn, cutoff))
    }
}

impl IFeedbackStore for StorageEngine {
    fn create_feedback(&self, feedback: &FeedbackRecord) -> MulaResult<FeedbackRecord> {
        let record = stamped(feedback);
        self.pool
            .writer
            .with_conn_sync(|conn| feedback_ops::insert_feedback(conn, &record))?;
        Ok(record)
    }

    fn get_feedback(&self, id: &str) -> MulaResult<Option<FeedbackRecord>> {
        self.with_reader(|conn| feedback_ops::get_feedback(conn, id))
    }

    fn update_feedback(&self, feedback: &FeedbackRecord) -> MulaResult<FeedbackRecord> {
        let record = stamped(feedback);
        self.pool
            .writer
            .with_conn_sync(|conn| feedback_ops::update_feedback(conn, &record))?;
        Ok(record)
    }

    fn list_feedback(
        &self,
        target_user_id: &str,
        review_period_id: &str,
    ) -> MulaResult<Vec<FeedbackRecord>> {
        self.with_reader(|conn| feedback_ops::list_feedback(conn, target_user_id, review_period_id))
    }

    fn set_visibility(&self, id: &str, visible: bool) -> MulaResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| feedback_ops::set_visibility(conn, id, visible))
    }

    fn set_moderation_status(&self, id: &str, status: ModerationStatus) -> MulaResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| feedback_ops::set_moderation_status(conn, id, status))
    }

    fn create_with_attempt(
        &self,
        feedback: &FeedbackRecord,
        attempt: &SubmissionAttempt,
    ) -> MulaResult<FeedbackRecord> {
        let record = stamped(feedback);
        self.pool.writer.with_conn_sync(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(format!("create_with_attempt begin: {e}")))?;

            // Attempt first: its unique index is what rejects a concurrent duplicate.
            let result = attempt_ops::insert_attempt(&tx, attempt)
                .and_then(|()| feedback_ops::insert_feedback(&tx, &record));
            match result {
                Ok(()) => {
                    tx.commit()
                        .map_err(|e| to_storage_err(format!("create_with_attempt commit: {e}")))?;
                    Ok(())
                }
                Err(e) => {
                    let _ = tx.rollback();
                    Err(e)
                }
            }
        })?;
        Ok(record)
    }
}

impl IPeriodStore for StorageEngine {
    fn create_period(&self, period: &ReviewPeriod) -> MulaResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| period_ops::insert_period(conn, period))
    }

    fn get_period(&self, id: &str) -> MulaResult<Option<ReviewPeriod>> {
        self.with_reader(|conn| period_ops::get_period(conn, id))
    }

    fn list_periods(&self) -> MulaResult<Vec<ReviewPeriod>> {
        self.with_reader(period_ops::list_periods)
    }

    fn set_period_active(&self, id: &str, active: bool) -> MulaResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| period_ops::set_active(conn, id, active))
    }

    fn active_period_at(&self, now: DateTime<Utc>) -> MulaResult<Option<ReviewPeriod>> {
        self.with_reader(|conn| period_ops::active_at(conn, now))
    }
}
