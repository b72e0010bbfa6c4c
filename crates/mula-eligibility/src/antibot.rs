//! Pre-gate bot checks: honeypot field and minimum fill time.

use chrono::{DateTime, Duration, Utc};

use mula_core::config::EligibilityConfig;
use mula_core::models::RejectReason;

#[derive(Debug, Clone)]
pub struct AntiBotGuard {
    min_fill: Duration,
}

impl AntiBotGuard {
    pub fn new(min_fill: Duration) -> Self {
        Self { min_fill }
    }

    /// An unrepresentable minimum fill time rejects every form as too fast.
    pub fn from_config(config: &EligibilityConfig) -> Self {
        Self::new(config.min_fill().unwrap_or(Duration::MAX))
    }

    /// Any non-empty honeypot value means a bot, whitespace included.
    pub fn check_honeypot(&self, honeypot: Option<&str>) -> Result<(), RejectReason> {
        match honeypot {
            Some(value) if !value.is_empty() => Err(RejectReason::Honeypot),
            _ => Ok(()),
        }
    }

    /// Reject forms submitted less than `min_fill` after they were loaded.
    /// A load time in the future is treated as too fast.
    pub fn check_timing(
        &self,
        form_loaded_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), RejectReason> {
        if form_loaded_at > now || now - form_loaded_at < self.min_fill {
            return Err(RejectReason::TooFast);
        }
        Ok(())
    }

    /// Honeypot first, then timing.
    pub fn check(
        &self,
        honeypot: Option<&str>,
        form_loaded_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), RejectReason> {
        self.check_honeypot(honeypot)?;
        self.check_timing(form_loaded_at, now)
    }
}
