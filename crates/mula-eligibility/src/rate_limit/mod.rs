//! Windowed rate counters and the key scheme they share.

use chrono::{DateTime, Duration, Utc};

use mula_core::errors::{MulaError, MulaResult};

pub mod attempt_history;
pub mod keys;
pub mod sliding_window;

pub use attempt_history::AttemptHistoryCounter;
pub use keys::{fingerprint_key, ip_key, parse_key, CounterKey};
pub use sliding_window::{SlidingWindowCounter, SWEEP_EVERY};

/// Oldest instant still outside a window ending at `now`.
pub(crate) fn window_floor(now: DateTime<Utc>, window: Duration) -> MulaResult<DateTime<Utc>> {
    now.checked_sub_signed(window)
        .ok_or_else(|| MulaError::RateCounterUnavailable {
            reason: format!("window of {window} reaches before the earliest representable time"),
        })
}
