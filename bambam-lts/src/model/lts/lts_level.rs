use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// ordinal Level of Traffic Stress rating for bicycle travel, from 1 (low stress)
/// to 5 (high stress). comparisons between levels are on their ordinal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LtsLevel {
    Lts1 = 1,
    Lts2 = 2,
    Lts3 = 3,
    Lts4 = 4,
    Lts5 = 5,
}

impl LtsLevel {
    pub const ALL: [LtsLevel; 5] = [
        LtsLevel::Lts1,
        LtsLevel::Lts2,
        LtsLevel::Lts3,
        LtsLevel::Lts4,
        LtsLevel::Lts5,
    ];

    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn from_rank(rank: u8) -> Option<LtsLevel> {
        match rank {
            1 => Some(LtsLevel::Lts1),
            2 => Some(LtsLevel::Lts2),
            3 => Some(LtsLevel::Lts3),
            4 => Some(LtsLevel::Lts4),
            5 => Some(LtsLevel::Lts5),
            _ => None,
        }
    }
}

impl Display for LtsLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LTS {}", self.rank())
    }
}

/// accepts the labels "LTS 2", "LTS2", "lts2" or the bare rank "2".
impl FromStr for LtsLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rank_str = match trimmed.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("lts") => trimmed[3..].trim_start(),
            _ => trimmed,
        };
        let rank = rank_str
            .parse::<u8>()
            .map_err(|e| format!("invalid LTS level '{s}': {e}"))?;
        LtsLevel::from_rank(rank).ok_or_else(|| {
            let valid = LtsLevel::ALL.iter().map(|l| l.to_string()).collect::<Vec<_>>();
            format!(
                "invalid LTS level '{s}', must be one of {}",
                valid.join(", ")
            )
        })
    }
}

impl TryFrom<String> for LtsLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LtsLevel::from_str(&value)
    }
}

impl From<LtsLevel> for String {
    fn from(value: LtsLevel) -> Self {
        value.to_string()
    }
}
