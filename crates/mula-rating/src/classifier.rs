//! Score averaging and tier mapping.
//!
//! ```text
//! average = round2(sum(scores) / 5)
//! tier    = golden  if average >= 4.5
//!           fresh   if average >= 3.0
//!           rotten  otherwise
//! ```
//!
//! Scores are assumed to be in 1..=5; bounds are enforced upstream.

use mula_core::constants::{AVERAGE_DECIMALS, CATEGORY_COUNT, FRESH_THRESHOLD, GOLDEN_THRESHOLD};
use mula_core::models::{Classification, MulaTier, RatingCategories};

/// Round to the fixed number of decimals every stored average uses.
pub fn round_average(value: f64) -> f64 {
    let factor = 10f64.powi(AVERAGE_DECIMALS as i32);
    (value * factor).round() / factor
}

/// Arithmetic mean of the five category scores, rounded to two decimals.
pub fn average(ratings: &RatingCategories) -> f64 {
    let sum: u32 = ratings.scores().iter().map(|&s| u32::from(s)).sum();
    round_average(f64::from(sum) / CATEGORY_COUNT as f64)
}

/// Map an average to its tier. Thresholds are inclusive lower bounds.
pub fn tier_for_average(average: f64) -> MulaTier {
    if average >= GOLDEN_THRESHOLD {
        MulaTier::GoldenMula
    } else if average >= FRESH_THRESHOLD {
        MulaTier::FreshCarrot
    } else {
        MulaTier::RottenTomato
    }
}

/// Classify a full set of ratings.
pub fn classify(ratings: &RatingCategories) -> Classification {
    let average = average(ratings);
    Classification {
        average,
        tier: tier_for_average(average),
    }
}
