//! In-process sliding window counter.
//!
//! One timestamp queue per key in a `DashMap`; entries at or before
//! `now - window` are pruned on every access. Every `SWEEP_EVERY`
//! increments the whole map is swept, so keys that stop receiving events
//! are dropped without any caller having to call [`SlidingWindowCounter::sweep`].

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use mula_core::errors::MulaResult;
use mula_core::models::WindowCount;
use mula_core::traits::IRateCounter;

use super::window_floor;

/// Increments between automatic sweeps.
pub const SWEEP_EVERY: u64 = 1_024;

/// Events for one key and the window they were last recorded under.
#[derive(Debug)]
struct Track {
    window: Duration,
    events: VecDeque<DateTime<Utc>>,
}

impl Track {
    fn new(window: Duration) -> Self {
        Self {
            window,
            events: VecDeque::new(),
        }
    }

    fn prune(&mut self, floor: DateTime<Utc>) {
        while self.events.front().is_some_and(|ts| *ts <= floor) {
            self.events.pop_front();
        }
    }

    fn count(&self, window: Duration) -> WindowCount {
        WindowCount {
            count: u32::try_from(self.events.len()).unwrap_or(u32::MAX),
            reset_at: self
                .events
                .front()
                .and_then(|oldest| oldest.checked_add_signed(window)),
        }
    }
}

#[derive(Debug, Default)]
pub struct SlidingWindowCounter {
    tracks: DashMap<String, Track>,
    increments: AtomicU64,
}

impl SlidingWindowCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently tracked.
    pub fn key_count(&self) -> usize {
        self.tracks.len()
    }

    /// Drop keys whose every event has aged out of the window it was recorded under.
    pub fn sweep(&self, now: DateTime<Utc>) {
        self.tracks.retain(|_, track| {
            if let Ok(floor) = window_floor(now, track.window) {
                track.prune(floor);
            }
            !track.events.is_empty()
        });
    }
}

impl IRateCounter for SlidingWindowCounter {
    fn current(&self, key: &str, window: Duration, now: DateTime<Utc>) -> MulaResult<WindowCount> {
        let floor = window_floor(now, window)?;
        match self.tracks.get_mut(key) {
            Some(mut track) => {
                track.prune(floor);
                Ok(track.count(window))
            }
            None => Ok(WindowCount::empty()),
        }
    }

    fn increment(
        &self,
        key: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> MulaResult<WindowCount> {
        let floor = window_floor(now, window)?;
        let counted = {
            let mut track = self
                .tracks
                .entry(key.to_string())
                .or_insert_with(|| Track::new(window));
            track.window = window;
            track.prune(floor);
            track.events.push_back(now);
            track.count(window)
        };
        // The entry guard above must be released before sweeping the map.
        if self.increments.fetch_add(1, Ordering::Relaxed) % SWEEP_EVERY == SWEEP_EVERY - 1 {
            self.sweep(now);
        }
        Ok(counted)
    }
}
