use chrono::{DateTime, Duration, Utc};

use crate::errors::MulaResult;
use crate::models::WindowCount;

/// Windowed event counter keyed by `<prefix>:<identity>` strings.
pub trait IRateCounter: Send + Sync {
    /// Events for `key` inside `(now - window, now]`, without recording one.
    fn current(&self, key: &str, window: Duration, now: DateTime<Utc>) -> MulaResult<WindowCount>;

    /// Record one event at `now` and return the updated window.
    fn increment(
        &self,
        key: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> MulaResult<WindowCount>;
}
