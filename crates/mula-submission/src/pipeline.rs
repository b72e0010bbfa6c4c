//! The submission pipeline.
//!
//! Order per request: validate, honeypot, timing, eligibility gate, then one
//! atomic write of the feedback and its `submitted` attempt. Honeypot and
//! timing rejections leave no attempt row; gate denials do.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use mula_core::config::{EligibilityConfig, MulaConfig};
use mula_core::errors::{MulaError, MulaResult};
use mula_core::models::{
    AttemptRecordRequest, EligibilityRequest, FeedbackRecord, RatingCategories, RejectReason,
};
use mula_core::traits::{IAttemptStore, IFeedbackStore, IPeriodStore, IRateCounter};
use mula_eligibility::{AntiBotGuard, AttemptHistoryCounter, AttemptRecorder, EligibilityGate};
use mula_observability::tracing_setup::events;
use mula_observability::{classification_span, submission_span, SubmissionMetrics};
use mula_storage::StorageEngine;

use crate::form::SubmissionForm;
use crate::outcome::{ResultsView, SubmissionOutcome};
use crate::validation::{validate_content, validate_form};

pub struct SubmissionPipeline {
    feedback: Arc<dyn IFeedbackStore>,
    gate: EligibilityGate,
    recorder: AttemptRecorder,
    guard: AntiBotGuard,
    metrics: Arc<SubmissionMetrics>,
}

impl SubmissionPipeline {
    pub fn new(
        feedback: Arc<dyn IFeedbackStore>,
        periods: Arc<dyn IPeriodStore>,
        attempts: Arc<dyn IAttemptStore>,
        counter: Arc<dyn IRateCounter>,
        config: &EligibilityConfig,
    ) -> Self {
        Self {
            feedback,
            gate: EligibilityGate::new(periods, attempts.clone(), counter.clone(), config.clone()),
            recorder: AttemptRecorder::new(attempts, counter, config.clone()),
            guard: AntiBotGuard::from_config(config),
            metrics: Arc::new(SubmissionMetrics::new()),
        }
    }

    /// Every store backed by one `StorageEngine`.
    pub fn with_storage(
        engine: Arc<StorageEngine>,
        counter: Arc<dyn IRateCounter>,
        config: &EligibilityConfig,
    ) -> Self {
        Self::new(engine.clone(), engine.clone(), engine, counter, config)
    }

    /// Open the configured database and count rate windows from attempt history.
    pub fn open(config: &MulaConfig) -> MulaResult<(Self, Arc<StorageEngine>)> {
        let engine = Arc::new(StorageEngine::open_with_config(
            Path::new(&config.storage.db_path),
            &config.storage,
        )?);
        let counter = Arc::new(AttemptHistoryCounter::new(engine.clone()));
        let pipeline = Self::with_storage(engine.clone(), counter, &config.eligibility);
        Ok((pipeline, engine))
    }

    pub fn metrics(&self) -> Arc<SubmissionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Run one submission. Business rejections come back as
    /// `SubmissionOutcome::Rejected`; only malformed input and storage
    /// faults after the gate are errors.
    pub fn submit(
        &self,
        form: &SubmissionForm,
        client_ip: &str,
        now: DateTime<Utc>,
    ) -> MulaResult<SubmissionOutcome> {
        let _span = submission_span!(form.target_user_id, form.review_period_id).entered();

        if let Err(err) = validate_form(form) {
            self.metrics.record_validation_failure();
            return Err(err);
        }

        if let Err(reason) = self
            .guard
            .check(form.honeypot.as_deref(), form.form_loaded_at, now)
        {
            let hash = self.gate.hasher().hash(client_ip);
            return Ok(self.reject(reason, None, hash.short()));
        }

        let request = EligibilityRequest::new(
            form.fingerprint.clone(),
            client_ip,
            form.target_user_id.clone(),
            form.review_period_id.clone(),
        );
        let verdict = self.gate.check(&request, now);
        if let Some(reason) = verdict.reason.filter(|_| !verdict.allowed) {
            let attempt = AttemptRecordRequest::rejected(request, reason);
            self.recorder.record(&attempt, now);
            let hash = self.gate.hasher().hash(client_ip);
            return Ok(self.reject(reason, verdict.message, hash.short()));
        }

        let classification = mula_rating::classify(&form.ratings);
        let record = FeedbackRecord::new(
            form.target_user_id.clone(),
            form.review_period_id.clone(),
            form.ratings.clone(),
            form.strengths.clone(),
            form.improvements.clone(),
            classification,
            now,
        );
        let submitted = AttemptRecordRequest::submitted(request);
        let attempt = self.recorder.attempt_for(&submitted, now);

        let stored = match self.feedback.create_with_attempt(&record, &attempt) {
            Ok(stored) => stored,
            Err(MulaError::DuplicateSubmission { .. }) => {
                // Lost a race with a concurrent submission from the same fingerprint.
                let blocked = AttemptRecordRequest::rejected(
                    submitted.request,
                    RejectReason::AlreadySubmitted,
                );
                self.recorder.record(&blocked, now);
                return Ok(self.reject(
                    RejectReason::AlreadySubmitted,
                    None,
                    attempt.ip_hash.short(),
                ));
            }
            Err(err) => return Err(err),
        };

        self.recorder
            .count_submission(&attempt.ip_hash, &attempt.fingerprint, now);
        self.metrics.record_accepted(stored.tier);
        events::submission_accepted(&stored.id, stored.tier, stored.average);

        Ok(SubmissionOutcome::Accepted {
            feedback_id: stored.id,
            tier: stored.tier,
            average: stored.average,
        })
    }

    fn reject(
        &self,
        reason: RejectReason,
        message: Option<String>,
        ip_hash_prefix: &str,
    ) -> SubmissionOutcome {
        self.metrics.record_rejected(reason);
        events::submission_rejected(reason, ip_hash_prefix);
        SubmissionOutcome::rejected(reason, message)
    }

    /// Replace ratings and free text on an existing record. The stored tier
    /// and average are recomputed from the new ratings.
    pub fn edit_feedback(
        &self,
        id: &str,
        ratings: RatingCategories,
        strengths: &str,
        improvements: &str,
        now: DateTime<Utc>,
    ) -> MulaResult<FeedbackRecord> {
        let _span = classification_span!(id).entered();
        validate_content(&ratings, strengths, improvements)?;

        let mut record = self
            .feedback
            .get_feedback(id)?
            .ok_or_else(|| MulaError::FeedbackNotFound { id: id.to_string() })?;
        record.ratings = ratings;
        record.strengths = strengths.to_string();
        record.improvements = improvements.to_string();
        record.updated_at = now;

        let updated = self.feedback.update_feedback(&record)?;
        tracing::debug!(tier = %updated.tier, average = updated.average, "feedback reclassified");
        Ok(updated)
    }

    /// Published summary and earned badges for a target in a period.
    pub fn results(&self, target_user_id: &str, review_period_id: &str) -> MulaResult<ResultsView> {
        let records = self.feedback.list_feedback(target_user_id, review_period_id)?;
        let summary = mula_rating::FeedbackSummary::from_records(&records);
        let badges = mula_rating::calculate_badges(&summary);
        Ok(ResultsView { summary, badges })
    }
}
