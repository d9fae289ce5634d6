use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how LTS ratings are applied to the routable graph.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMethod {
    /// keep every rated edge, penalizing the weight of edges above the threshold
    #[default]
    Preferred,
    /// keep only edges at or below the threshold
    Exclusive,
}

impl Display for OutputMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMethod::Preferred => write!(f, "preferred"),
            OutputMethod::Exclusive => write!(f, "exclusive"),
        }
    }
}
