//! # mula-eligibility
//!
//! Decides whether an anonymous feedback attempt may proceed: period check,
//! one-per-fingerprint duplicate check, then IP and fingerprint rate windows.
//! Also hosts the pre-gate anti-bot checks and the attempt recorder.

pub mod antibot;
pub mod gate;
pub mod rate_limit;
pub mod recorder;

pub use antibot::AntiBotGuard;
pub use gate::EligibilityGate;
pub use rate_limit::{AttemptHistoryCounter, SlidingWindowCounter};
pub use recorder::AttemptRecorder;
