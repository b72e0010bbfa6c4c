//! The eligibility gate.
//!
//! Checks run in a fixed order and short-circuit on the first denial:
//! period open, duplicate submission, IP window, fingerprint window.
//! The gate only reads. Any store or counter error denies with
//! `RejectReason::Error`.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use mula_core::config::EligibilityConfig;
use mula_core::errors::MulaError;
use mula_core::models::{EligibilityRequest, EligibilityVerdict, IpHasher, RejectReason};
use mula_core::traits::{IAttemptStore, IPeriodStore, IRateCounter};
use mula_observability::eligibility_span;
use mula_observability::tracing_setup::events;

use crate::rate_limit::{fingerprint_key, ip_key};

pub struct EligibilityGate {
    periods: Arc<dyn IPeriodStore>,
    attempts: Arc<dyn IAttemptStore>,
    counter: Arc<dyn IRateCounter>,
    hasher: IpHasher,
    config: EligibilityConfig,
}

/// Which check failed with an infrastructure error.
type StageError = (&'static str, MulaError);

impl EligibilityGate {
    pub fn new(
        periods: Arc<dyn IPeriodStore>,
        attempts: Arc<dyn IAttemptStore>,
        counter: Arc<dyn IRateCounter>,
        config: EligibilityConfig,
    ) -> Self {
        Self {
            periods,
            attempts,
            counter,
            hasher: IpHasher::new(&config.ip_hash_salt),
            config,
        }
    }

    pub fn hasher(&self) -> &IpHasher {
        &self.hasher
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Decide whether `request` may proceed at `now`. Never errors.
    pub fn check(&self, request: &EligibilityRequest, now: DateTime<Utc>) -> EligibilityVerdict {
        let _span = eligibility_span!(request.target_user_id, request.review_period_id).entered();
        match self.evaluate(request, now) {
            Ok(verdict) => {
                if let Some(reason) = verdict.reason {
                    tracing::debug!(reason = reason.code(), "eligibility denied");
                }
                verdict
            }
            Err((stage, err)) => {
                events::eligibility_failed(stage, &err);
                EligibilityVerdict::denied(RejectReason::Error)
            }
        }
    }

    fn evaluate(
        &self,
        request: &EligibilityRequest,
        now: DateTime<Utc>,
    ) -> Result<EligibilityVerdict, StageError> {
        let period = self
            .periods
            .get_period(&request.review_period_id)
            .map_err(|e| ("period", e))?;
        if !period.is_some_and(|p| p.accepts_submissions_at(now)) {
            return Ok(EligibilityVerdict::denied(RejectReason::PeriodInactive));
        }

        let duplicate = self
            .attempts
            .has_submitted(
                &request.fingerprint,
                &request.target_user_id,
                &request.review_period_id,
            )
            .map_err(|e| ("duplicate", e))?;
        if duplicate {
            return Ok(EligibilityVerdict::denied(RejectReason::AlreadySubmitted));
        }

        let ip_hash = self.hasher.hash(&request.ip_address);
        let ip_span = self
            .config
            .ip_window()
            .map_err(|e| ("ip_rate", MulaError::from(e)))?;
        let ip_window = self
            .counter
            .current(&ip_key(&ip_hash), ip_span, now)
            .map_err(|e| ("ip_rate", e))?;
        if ip_window.reached(self.config.ip_limit) {
            return Ok(EligibilityVerdict::denied_until(
                RejectReason::IpRateLimited,
                ip_window.reset_at,
            ));
        }

        let fp_span = self
            .config
            .fingerprint_window()
            .map_err(|e| ("fingerprint_rate", MulaError::from(e)))?;
        let fp_window = self
            .counter
            .current(&fingerprint_key(&request.fingerprint), fp_span, now)
            .map_err(|e| ("fingerprint_rate", e))?;
        if fp_window.reached(self.config.fingerprint_limit) {
            return Ok(EligibilityVerdict::denied_until(
                RejectReason::FingerprintRateLimited,
                fp_window.reset_at,
            ));
        }

        Ok(EligibilityVerdict::allowed())
    }
}
