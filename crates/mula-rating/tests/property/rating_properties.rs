use mula_core::models::{MulaTier, RatingCategories};
use mula_rating::{classify, TierDistribution};
use proptest::prelude::*;

fn arb_scores() -> impl Strategy<Value = [u8; 5]> {
    prop::array::uniform5(1u8..=5)
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(scores in arb_scores()) {
        let ratings = RatingCategories::from_scores(scores);
        prop_assert_eq!(classify(&ratings), classify(&ratings.clone()));
    }

    #[test]
    fn prop_average_within_score_bounds(scores in arb_scores()) {
        let c = classify(&RatingCategories::from_scores(scores));
        prop_assert!((1.0..=5.0).contains(&c.average));
    }

    #[test]
    fn prop_tier_matches_thresholds(scores in arb_scores()) {
        let c = classify(&RatingCategories::from_scores(scores));
        let expected = if c.average >= 4.5 {
            MulaTier::GoldenMula
        } else if c.average >= 3.0 {
            MulaTier::FreshCarrot
        } else {
            MulaTier::RottenTomato
        };
        prop_assert_eq!(c.tier, expected);
    }

    #[test]
    fn prop_raising_a_score_never_lowers_tier(scores in arb_scores(), idx in 0usize..5) {
        let before = classify(&RatingCategories::from_scores(scores));
        let mut raised = scores;
        raised[idx] = (raised[idx] + 1).min(5);
        let after = classify(&RatingCategories::from_scores(raised));
        prop_assert!(after.tier >= before.tier);
    }

    #[test]
    fn prop_distribution_total_and_dominant(
        golden in 0u32..50,
        fresh in 0u32..50,
        rotten in 0u32..50,
    ) {
        let dist = TierDistribution::from_counts(golden, fresh, rotten);
        prop_assert_eq!(dist.total, golden + fresh + rotten);
        match dist.dominant {
            None => prop_assert_eq!(dist.total, 0),
            Some(tier) => {
                let max = golden.max(fresh).max(rotten);
                prop_assert_eq!(dist.count(tier), max);
            }
        }
    }
}
