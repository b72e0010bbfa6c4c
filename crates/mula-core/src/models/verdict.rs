use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Machine-readable reason a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The review period is missing, switched off, or outside its dates.
    PeriodInactive,
    /// This device already submitted feedback for the target in this period.
    AlreadySubmitted,
    IpRateLimited,
    FingerprintRateLimited,
    /// Hidden form field was filled in.
    Honeypot,
    /// Form submitted faster than a human could fill it in.
    TooFast,
    /// Eligibility could not be determined; fail closed.
    Error,
}

impl RejectReason {
    pub const ALL: [RejectReason; 7] = [
        Self::PeriodInactive,
        Self::AlreadySubmitted,
        Self::IpRateLimited,
        Self::FingerprintRateLimited,
        Self::Honeypot,
        Self::TooFast,
        Self::Error,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::PeriodInactive => "period_inactive",
            Self::AlreadySubmitted => "already_submitted",
            Self::IpRateLimited => "ip_rate_limited",
            Self::FingerprintRateLimited => "fingerprint_rate_limited",
            Self::Honeypot => "honeypot",
            Self::TooFast => "too_fast",
            Self::Error => "error",
        }
    }

    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::IpRateLimited | Self::FingerprintRateLimited)
    }

    /// User-facing message. Never includes identifiers.
    pub fn message(&self, reset_at: Option<DateTime<Utc>>) -> String {
        let retry = match reset_at {
            Some(at) => format!("Please try again after {} UTC.", at.format("%H:%M")),
            None => "Please try again later.".to_string(),
        };
        match self {
            Self::PeriodInactive => {
                "This review period is not accepting feedback right now.".to_string()
            }
            Self::AlreadySubmitted => {
                "You have already submitted feedback for this person in this review period."
                    .to_string()
            }
            Self::IpRateLimited => {
                format!("Too many submissions from your network. {retry}")
            }
            Self::FingerprintRateLimited => {
                format!("Too many submissions from this device. {retry}")
            }
            Self::Honeypot => "Your submission could not be accepted.".to_string(),
            Self::TooFast => {
                "That was quick! Please take a moment to write thoughtful feedback.".to_string()
            }
            Self::Error => {
                "We could not verify your submission right now. Please try again later."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RejectReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| format!("unknown reject reason: {s}"))
    }
}

/// Result of an eligibility check: `{ allowed, reason?, message? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EligibilityVerdict {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
            message: None,
        }
    }

    pub fn denied(reason: RejectReason) -> Self {
        Self::denied_until(reason, None)
    }

    /// Denial whose message mentions when the blocking window resets.
    pub fn denied_until(reason: RejectReason, reset_at: Option<DateTime<Utc>>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            message: Some(reason.message(reset_at)),
        }
    }
}
