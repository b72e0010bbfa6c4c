//! Tier counts across a set of already-classified records.

use serde::{Deserialize, Serialize};

use mula_core::models::{FeedbackRecord, MulaTier};

/// Per-tier counts, whole-number percentages, and the dominant tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDistribution {
    pub golden: u32,
    pub fresh: u32,
    pub rotten: u32,
    pub total: u32,
    pub golden_pct: u32,
    pub fresh_pct: u32,
    pub rotten_pct: u32,
    /// `None` when there are no records.
    pub dominant: Option<MulaTier>,
}

impl TierDistribution {
    pub fn from_counts(golden: u32, fresh: u32, rotten: u32) -> Self {
        let total = golden + fresh + rotten;
        Self {
            golden,
            fresh,
            rotten,
            total,
            golden_pct: percent(golden, total),
            fresh_pct: percent(fresh, total),
            rotten_pct: percent(rotten, total),
            dominant: dominant_tier(golden, fresh, rotten),
        }
    }

    pub fn from_tiers<I>(tiers: I) -> Self
    where
        I: IntoIterator<Item = MulaTier>,
    {
        let (mut golden, mut fresh, mut rotten) = (0, 0, 0);
        for tier in tiers {
            match tier {
                MulaTier::GoldenMula => golden += 1,
                MulaTier::FreshCarrot => fresh += 1,
                MulaTier::RottenTomato => rotten += 1,
            }
        }
        Self::from_counts(golden, fresh, rotten)
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FeedbackRecord>,
    {
        Self::from_tiers(records.into_iter().map(|r| r.tier))
    }

    pub fn count(&self, tier: MulaTier) -> u32 {
        match tier {
            MulaTier::GoldenMula => self.golden,
            MulaTier::FreshCarrot => self.fresh,
            MulaTier::RottenTomato => self.rotten,
        }
    }
}

fn percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) * 100.0 / f64::from(total)).round() as u32
}

/// Sequential comparison: start from fresh, golden overrides only on a strictly
/// greater count, then rotten overrides the current leader only on a strictly
/// greater count. Ties therefore resolve fresh > golden > rotten.
fn dominant_tier(golden: u32, fresh: u32, rotten: u32) -> Option<MulaTier> {
    if golden + fresh + rotten == 0 {
        return None;
    }
    let mut dominant = MulaTier::FreshCarrot;
    let mut leader = fresh;
    if golden > leader {
        dominant = MulaTier::GoldenMula;
        leader = golden;
    }
    if rotten > leader {
        dominant = MulaTier::RottenTomato;
    }
    Some(dominant)
}
