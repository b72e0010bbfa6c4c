//! Rate counter backed by the attempt store.
//!
//! The `submitted` attempt rows are the events, so `increment` records
//! nothing and simply reports the window. Survives restarts and is shared
//! across every process using the same database.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use mula_core::errors::{MulaError, MulaResult};
use mula_core::models::{IpHash, WindowCount};
use mula_core::traits::{AttemptScope, IAttemptStore, IRateCounter};

use super::keys::{parse_key, CounterKey};
use super::window_floor;

pub struct AttemptHistoryCounter {
    attempts: Arc<dyn IAttemptStore>,
}

impl AttemptHistoryCounter {
    pub fn new(attempts: Arc<dyn IAttemptStore>) -> Self {
        Self { attempts }
    }
}

impl IRateCounter for AttemptHistoryCounter {
    fn current(&self, key: &str, window: Duration, now: DateTime<Utc>) -> MulaResult<WindowCount> {
        let since = window_floor(now, window)?;
        let hits = match parse_key(key) {
            Some(CounterKey::Ip(hash)) => {
                let hash = IpHash::from_stored(hash);
                self.attempts
                    .submitted_since(AttemptScope::Ip(&hash), since)?
            }
            Some(CounterKey::Fingerprint(fp)) => self
                .attempts
                .submitted_since(AttemptScope::Fingerprint(fp), since)?,
            None => {
                return Err(MulaError::RateCounterUnavailable {
                    reason: format!("unrecognized counter key prefix in {key:?}"),
                })
            }
        };
        Ok(WindowCount {
            count: u32::try_from(hits.len()).unwrap_or(u32::MAX),
            reset_at: hits.first().and_then(|oldest| oldest.checked_add_signed(window)),
        })
    }

    fn increment(
        &self,
        key: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> MulaResult<WindowCount> {
        self.current(key, window, now)
    }
}
