//! Published-results summary for one target user in one review period.

use serde::{Deserialize, Serialize};

use mula_core::models::{Category, FeedbackRecord};

use crate::aggregate::TierDistribution;
use crate::classifier::round_average;

/// Mean score per category, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverages {
    pub work_quality: f64,
    pub communication: f64,
    pub team_behavior: f64,
    pub accountability: f64,
    pub overall: f64,
}

impl CategoryAverages {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::WorkQuality => self.work_quality,
            Category::Communication => self.communication,
            Category::TeamBehavior => self.team_behavior,
            Category::Accountability => self.accountability,
            Category::Overall => self.overall,
        }
    }

    fn set(&mut self, category: Category, value: f64) {
        let slot = match category {
            Category::WorkQuality => &mut self.work_quality,
            Category::Communication => &mut self.communication,
            Category::TeamBehavior => &mut self.team_behavior,
            Category::Accountability => &mut self.accountability,
            Category::Overall => &mut self.overall,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub count: u32,
    pub overall_average: f64,
    pub category_averages: CategoryAverages,
    pub distribution: TierDistribution,
}

impl FeedbackSummary {
    /// Summarize the published subset of `records`. Hidden and removed records are skipped.
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        let published: Vec<&FeedbackRecord> = records.iter().filter(|r| r.is_published()).collect();
        if published.is_empty() {
            return Self::default();
        }
        let n = published.len() as f64;

        let mut category_averages = CategoryAverages::default();
        for category in Category::ALL {
            let sum: u32 = published
                .iter()
                .map(|r| u32::from(r.ratings.get(category).score))
                .sum();
            category_averages.set(category, round_average(f64::from(sum) / n));
        }

        let overall_sum: f64 = published.iter().map(|r| r.average).sum();

        Self {
            count: published.len() as u32,
            overall_average: round_average(overall_sum / n),
            category_averages,
            distribution: TierDistribution::from_records(published.iter().copied()),
        }
    }
}
