//! Counters for accepted submissions (by tier), rejections (by reason), and
//! validation failures. Shared across threads without locking.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use mula_core::models::{MulaTier, RejectReason};

#[derive(Debug, Default)]
pub struct SubmissionMetrics {
    accepted_golden: AtomicU64,
    accepted_fresh: AtomicU64,
    accepted_rotten: AtomicU64,
    rejected: [AtomicU64; RejectReason::ALL.len()],
    validation_failures: AtomicU64,
}

/// Point-in-time copy of [`SubmissionMetrics`], keyed by wire codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub accepted_total: u64,
    pub accepted_by_tier: BTreeMap<&'static str, u64>,
    pub rejected_total: u64,
    pub rejected_by_reason: BTreeMap<&'static str, u64>,
    pub validation_failures: u64,
}

impl SubmissionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&self, tier: MulaTier) {
        let counter = match tier {
            MulaTier::GoldenMula => &self.accepted_golden,
            MulaTier::FreshCarrot => &self.accepted_fresh,
            MulaTier::RottenTomato => &self.accepted_rotten,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self, reason: RejectReason) {
        if let Some(idx) = RejectReason::ALL.iter().position(|r| *r == reason) {
            self.rejected[idx].fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn rejected_count(&self, reason: RejectReason) -> u64 {
        RejectReason::ALL
            .iter()
            .position(|r| *r == reason)
            .map(|idx| self.rejected[idx].load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let mut accepted_by_tier = BTreeMap::new();
        accepted_by_tier.insert(
            MulaTier::GoldenMula.as_str(),
            self.accepted_golden.load(Ordering::Relaxed),
        );
        accepted_by_tier.insert(
            MulaTier::FreshCarrot.as_str(),
            self.accepted_fresh.load(Ordering::Relaxed),
        );
        accepted_by_tier.insert(
            MulaTier::RottenTomato.as_str(),
            self.accepted_rotten.load(Ordering::Relaxed),
        );

        let rejected_by_reason: BTreeMap<&'static str, u64> = RejectReason::ALL
            .iter()
            .zip(self.rejected.iter())
            .map(|(reason, count)| (reason.code(), count.load(Ordering::Relaxed)))
            .collect();

        MetricsSnapshot {
            accepted_total: accepted_by_tier.values().sum(),
            accepted_by_tier,
            rejected_total: rejected_by_reason.values().sum(),
            rejected_by_reason,
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter.
    pub fn reset(&self) {
        self.accepted_golden.store(0, Ordering::Relaxed);
        self.accepted_fresh.store(0, Ordering::Relaxed);
        self.accepted_rotten.store(0, Ordering::Relaxed);
        for counter in &self.rejected {
            counter.store(0, Ordering::Relaxed);
        }
        self.validation_failures.store(0, Ordering::Relaxed);
    }
}
