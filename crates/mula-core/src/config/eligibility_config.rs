use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Eligibility gate and anti-bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityConfig {
    /// Submissions allowed per IP hash within `ip_window_secs`.
    pub ip_limit: u32,
    /// Length of the IP rate window in seconds.
    pub ip_window_secs: u64,
    /// Submissions allowed per fingerprint within `fingerprint_window_secs`.
    pub fingerprint_limit: u32,
    /// Length of the fingerprint rate window in seconds.
    pub fingerprint_window_secs: u64,
    /// Minimum seconds between form load and submission.
    pub min_fill_secs: u64,
    /// Salt mixed into every IP hash.
    pub ip_hash_salt: String,
}

impl EligibilityConfig {
    pub fn ip_window(&self) -> Result<Duration, ConfigError> {
        seconds("eligibility.ip_window_secs", self.ip_window_secs)
    }

    pub fn fingerprint_window(&self) -> Result<Duration, ConfigError> {
        seconds("eligibility.fingerprint_window_secs", self.fingerprint_window_secs)
    }

    pub fn min_fill(&self) -> Result<Duration, ConfigError> {
        seconds("eligibility.min_fill_secs", self.min_fill_secs)
    }
}

/// Fails instead of wrapping or panicking when `secs` has no `Duration`.
fn seconds(field: &str, secs: u64) -> Result<Duration, ConfigError> {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(|| ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("{secs} seconds is out of range"),
        })
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            ip_limit: defaults::DEFAULT_IP_LIMIT,
            ip_window_secs: defaults::DEFAULT_IP_WINDOW_SECS,
            fingerprint_limit: defaults::DEFAULT_FINGERPRINT_LIMIT,
            fingerprint_window_secs: defaults::DEFAULT_FINGERPRINT_WINDOW_SECS,
            min_fill_secs: defaults::DEFAULT_MIN_FILL_SECS,
            ip_hash_salt: defaults::DEFAULT_IP_HASH_SALT.to_string(),
        }
    }
}
