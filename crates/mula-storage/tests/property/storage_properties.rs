//! Property tests: stored tier always matches the classifier, window queries
//! agree with a straightforward filter.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use mula_core::models::{
    AttemptStatus, Classification, FeedbackRecord, IpHasher, MulaTier, RatingCategories,
    ReviewPeriod, SubmissionAttempt,
};
use mula_core::traits::{AttemptScope, IAttemptStore, IFeedbackStore, IPeriodStore};
use mula_storage::StorageEngine;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

proptest! {
    #[test]
    fn prop_stored_tier_matches_classifier(scores in prop::array::uniform5(1u8..=5)) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let period = ReviewPeriod::new("Q", t0(), t0() + Duration::days(1), t0());
        engine.create_period(&period).unwrap();

        let ratings = RatingCategories::from_scores(scores);
        let record = FeedbackRecord::new(
            "alice",
            &period.id,
            ratings.clone(),
            "",
            "",
            Classification {
                average: -1.0,
                tier: MulaTier::GoldenMula,
            },
            t0(),
        );
        let stored = engine.create_feedback(&record).unwrap();
        let expected = mula_rating::classify(&ratings);
        let loaded = engine.get_feedback(&stored.id).unwrap().unwrap();
        prop_assert_eq!(loaded.tier, expected.tier);
        prop_assert!((loaded.average - expected.average).abs() < 1e-9);
    }

    #[test]
    fn prop_submitted_since_matches_filter(
        offsets in prop::collection::vec(0i64..7200, 1..20),
        since_offset in 0i64..7200,
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let period = ReviewPeriod::new("Q", t0(), t0() + Duration::days(1), t0());
        engine.create_period(&period).unwrap();
        let hash = IpHasher::new("salt").hash("10.0.0.1");

        for (i, offset) in offsets.iter().enumerate() {
            let attempt = SubmissionAttempt::new(
                "fp",
                hash.clone(),
                format!("target-{i}"),
                &period.id,
                AttemptStatus::Submitted,
                None,
                t0() + Duration::seconds(*offset),
            );
            engine.insert_attempt(&attempt).unwrap();
        }

        let since = t0() + Duration::seconds(since_offset);
        let hits = engine.submitted_since(AttemptScope::Ip(&hash), since).unwrap();
        let expected = offsets.iter().filter(|o| **o > since_offset).count();
        prop_assert_eq!(hits.len(), expected);
        prop_assert!(hits.windows(2).all(|w| w[0] <= w[1]));
    }
}
