use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCORE, MIN_SCORE};

/// The five fixed rating categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    WorkQuality,
    Communication,
    TeamBehavior,
    Accountability,
    Overall,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::WorkQuality,
        Self::Communication,
        Self::TeamBehavior,
        Self::Accountability,
        Self::Overall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkQuality => "work_quality",
            Self::Communication => "communication",
            Self::TeamBehavior => "team_behavior",
            Self::Accountability => "accountability",
            Self::Overall => "overall",
        }
    }
}

/// A single category score with an optional free-text comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRating {
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CategoryRating {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            comment: None,
        }
    }

    pub fn with_comment(score: u8, comment: impl Into<String>) -> Self {
        Self {
            score,
            comment: Some(comment.into()),
        }
    }

    /// Whether the score lies in the accepted 1..=5 range.
    pub fn in_range(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.score)
    }
}

/// The full set of category ratings on one feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingCategories {
    pub work_quality: CategoryRating,
    pub communication: CategoryRating,
    pub team_behavior: CategoryRating,
    pub accountability: CategoryRating,
    pub overall: CategoryRating,
}

impl RatingCategories {
    /// Build from bare scores in `Category::ALL` order, without comments.
    pub fn from_scores(scores: [u8; 5]) -> Self {
        let [work_quality, communication, team_behavior, accountability, overall] = scores;
        Self {
            work_quality: CategoryRating::new(work_quality),
            communication: CategoryRating::new(communication),
            team_behavior: CategoryRating::new(team_behavior),
            accountability: CategoryRating::new(accountability),
            overall: CategoryRating::new(overall),
        }
    }

    pub fn get(&self, category: Category) -> &CategoryRating {
        match category {
            Category::WorkQuality => &self.work_quality,
            Category::Communication => &self.communication,
            Category::TeamBehavior => &self.team_behavior,
            Category::Accountability => &self.accountability,
            Category::Overall => &self.overall,
        }
    }

    /// Scores in `Category::ALL` order.
    pub fn scores(&self) -> [u8; 5] {
        Category::ALL.map(|c| self.get(c).score)
    }

    /// First category whose score falls outside 1..=5, if any.
    pub fn first_out_of_range(&self) -> Option<Category> {
        Category::ALL.into_iter().find(|c| !self.get(*c).in_range())
    }
}
