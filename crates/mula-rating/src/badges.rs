//! Badge rules evaluated over a published-results summary.

use serde::{Deserialize, Serialize};

use mula_core::models::Category;

use crate::summary::FeedbackSummary;

/// Feedback records required before any badge can be earned.
pub const MIN_FEEDBACK_FOR_BADGES: u32 = 3;

/// Records required for `CrowdFavorite`.
const CROWD_FAVORITE_MIN_FEEDBACK: u32 = 5;

/// Category average needed for a category badge.
const CATEGORY_BADGE_THRESHOLD: f64 = 4.5;

/// Golden share (percent) needed for `GoldenStreak`.
const GOLDEN_STREAK_MIN_PCT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Craftsman,
    ClearCommunicator,
    TeamPlayer,
    Dependable,
    GoldenStreak,
    CrowdFavorite,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Craftsman => "Craftsman",
            Self::ClearCommunicator => "Clear Communicator",
            Self::TeamPlayer => "Team Player",
            Self::Dependable => "Dependable",
            Self::GoldenStreak => "Golden Streak",
            Self::CrowdFavorite => "Crowd Favorite",
        }
    }
}

struct BadgeRule {
    badge: Badge,
    earned: fn(&FeedbackSummary) -> bool,
}

fn category_at_least(summary: &FeedbackSummary, category: Category) -> bool {
    summary.category_averages.get(category) >= CATEGORY_BADGE_THRESHOLD
}

fn craftsman(s: &FeedbackSummary) -> bool {
    category_at_least(s, Category::WorkQuality)
}

fn clear_communicator(s: &FeedbackSummary) -> bool {
    category_at_least(s, Category::Communication)
}

fn team_player(s: &FeedbackSummary) -> bool {
    category_at_least(s, Category::TeamBehavior)
}

fn dependable(s: &FeedbackSummary) -> bool {
    category_at_least(s, Category::Accountability)
}

fn golden_streak(s: &FeedbackSummary) -> bool {
    s.distribution.golden_pct >= GOLDEN_STREAK_MIN_PCT
}

fn crowd_favorite(s: &FeedbackSummary) -> bool {
    s.count >= CROWD_FAVORITE_MIN_FEEDBACK && s.distribution.rotten == 0
}

const RULES: &[BadgeRule] = &[
    BadgeRule {
        badge: Badge::Craftsman,
        earned: craftsman,
    },
    BadgeRule {
        badge: Badge::ClearCommunicator,
        earned: clear_communicator,
    },
    BadgeRule {
        badge: Badge::TeamPlayer,
        earned: team_player,
    },
    BadgeRule {
        badge: Badge::Dependable,
        earned: dependable,
    },
    BadgeRule {
        badge: Badge::GoldenStreak,
        earned: golden_streak,
    },
    BadgeRule {
        badge: Badge::CrowdFavorite,
        earned: crowd_favorite,
    },
];

/// Every badge whose rule holds, in rule order.
pub fn calculate_badges(summary: &FeedbackSummary) -> Vec<Badge> {
    if summary.count < MIN_FEEDBACK_FOR_BADGES {
        return Vec::new();
    }
    RULES
        .iter()
        .filter(|rule| (rule.earned)(summary))
        .map(|rule| rule.badge)
        .collect()
}
