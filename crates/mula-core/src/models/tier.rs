use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reward tier a feedback record is classified into.
///
/// Ordered from worst to best so that `RottenTomato < FreshCarrot < GoldenMula`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MulaTier {
    RottenTomato,
    FreshCarrot,
    GoldenMula,
}

impl MulaTier {
    pub const ALL: [MulaTier; 3] = [Self::GoldenMula, Self::FreshCarrot, Self::RottenTomato];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoldenMula => "golden_mula",
            Self::FreshCarrot => "fresh_carrot",
            Self::RottenTomato => "rotten_tomato",
        }
    }
}

impl fmt::Display for MulaTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MulaTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "golden_mula" => Ok(Self::GoldenMula),
            "fresh_carrot" => Ok(Self::FreshCarrot),
            "rotten_tomato" => Ok(Self::RottenTomato),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

/// Output of the rating classifier: the rounded average and the tier it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub average: f64,
    pub tier: MulaTier,
}
