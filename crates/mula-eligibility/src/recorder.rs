//! Attempt bookkeeping.
//!
//! Writes are fire-and-forget: a failure is logged and swallowed so it can
//! never change the outcome already returned to the reviewer.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use mula_core::config::EligibilityConfig;
use mula_core::errors::MulaError;
use mula_core::models::{AttemptRecordRequest, AttemptStatus, IpHash, IpHasher, SubmissionAttempt};
use mula_core::traits::{IAttemptStore, IRateCounter};
use mula_observability::tracing_setup::events;

use crate::rate_limit::{fingerprint_key, ip_key};

pub struct AttemptRecorder {
    attempts: Arc<dyn IAttemptStore>,
    counter: Arc<dyn IRateCounter>,
    hasher: IpHasher,
    config: EligibilityConfig,
}

impl AttemptRecorder {
    pub fn new(
        attempts: Arc<dyn IAttemptStore>,
        counter: Arc<dyn IRateCounter>,
        config: EligibilityConfig,
    ) -> Self {
        Self {
            attempts,
            counter,
            hasher: IpHasher::new(&config.ip_hash_salt),
            config,
        }
    }

    /// Build the attempt row for `record`, hashing the raw IP.
    pub fn attempt_for(
        &self,
        record: &AttemptRecordRequest,
        now: DateTime<Utc>,
    ) -> SubmissionAttempt {
        let req = &record.request;
        SubmissionAttempt::new(
            req.fingerprint.clone(),
            self.hasher.hash(&req.ip_address),
            req.target_user_id.clone(),
            req.review_period_id.clone(),
            record.status,
            record.block_reason,
            now,
        )
    }

    /// Persist one attempt. `submitted` attempts also bump both rate windows.
    pub fn record(&self, record: &AttemptRecordRequest, now: DateTime<Utc>) {
        let attempt = self.attempt_for(record, now);
        if let Err(err) = self.attempts.insert_attempt(&attempt) {
            events::attempt_record_failed(&err);
            return;
        }
        if attempt.status == AttemptStatus::Submitted {
            self.count_submission(&attempt.ip_hash, &attempt.fingerprint, now);
        }
    }

    /// Bump the IP and fingerprint windows for an accepted submission.
    pub fn count_submission(&self, ip_hash: &IpHash, fingerprint: &str, now: DateTime<Utc>) {
        let bumps = [
            (ip_key(ip_hash), self.config.ip_window()),
            (fingerprint_key(fingerprint), self.config.fingerprint_window()),
        ];
        for (key, window) in bumps {
            let bumped = window
                .map_err(MulaError::from)
                .and_then(|window| self.counter.increment(&key, window, now));
            if let Err(err) = bumped {
                tracing::warn!(error = %err, "rate counter increment failed");
            }
        }
    }
}
