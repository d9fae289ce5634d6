use crate::model::lts::LtsLevel;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the rule set used to rate ways. LTS values produced by different methods
/// are on different scales and should not be mixed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LtsMethod {
    /// rates ways from cycle facility presence, speed and lane count on a 1-4 scale
    Conveyal,
    /// multi-factor rating using parking, bike lane widths and buffers on a 1-5 scale
    #[default]
    Detailed,
}

impl LtsMethod {
    /// highest level this method can produce
    pub fn max_level(&self) -> LtsLevel {
        match self {
            LtsMethod::Conveyal => LtsLevel::Lts4,
            LtsMethod::Detailed => LtsLevel::Lts5,
        }
    }
}

impl Display for LtsMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LtsMethod::Conveyal => write!(f, "conveyal"),
            LtsMethod::Detailed => write!(f, "detailed"),
        }
    }
}
