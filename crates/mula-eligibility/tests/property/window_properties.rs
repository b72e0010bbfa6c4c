//! Property tests: the sliding window agrees with a direct count.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use mula_core::traits::IRateCounter;
use mula_eligibility::SlidingWindowCounter;

proptest! {
    #[test]
    fn prop_window_count_matches_direct_count(
        mut offsets in prop::collection::vec(0i64..10_000, 0..40),
        window_secs in 1i64..5_000,
        at_secs in 0i64..12_000,
    ) {
        offsets.sort_unstable();
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let window = Duration::seconds(window_secs);
        let counter = SlidingWindowCounter::new();
        for offset in offsets.iter().filter(|o| **o <= at_secs) {
            counter.increment("k", window, base + Duration::seconds(*offset)).unwrap();
        }

        let expected = offsets
            .iter()
            .filter(|o| **o <= at_secs && **o > at_secs - window_secs)
            .count() as u32;
        let got = counter.current("k", window, base + Duration::seconds(at_secs)).unwrap();
        prop_assert_eq!(got.count, expected);
        if expected == 0 {
            prop_assert!(got.reset_at.is_none());
        } else {
            prop_assert!(got.reset_at.unwrap() > base + Duration::seconds(at_secs));
        }
    }

    #[test]
    fn prop_sweep_keeps_only_live_keys(
        offsets in prop::collection::vec(0i64..1_000, 1..20),
    ) {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let window = Duration::seconds(100);
        let counter = SlidingWindowCounter::new();
        for (i, offset) in offsets.iter().enumerate() {
            counter.increment(&format!("k{i}"), window, base + Duration::seconds(*offset)).unwrap();
        }
        let now = base + Duration::seconds(1_000);
        counter.sweep(now);
        let live = offsets.iter().filter(|o| **o > 900).count();
        prop_assert_eq!(counter.key_count(), live);
    }
}
