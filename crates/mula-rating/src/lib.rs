//! # mula-rating
//!
//! Pure classification of feedback scores into reward tiers, plus the
//! aggregates the results view is built from. Nothing in this crate does I/O.

pub mod aggregate;
pub mod badges;
pub mod classifier;
pub mod summary;

pub use aggregate::TierDistribution;
pub use badges::{calculate_badges, Badge, MIN_FEEDBACK_FOR_BADGES};
pub use classifier::{average, classify, round_average, tier_for_average};
pub use summary::{CategoryAverages, FeedbackSummary};
