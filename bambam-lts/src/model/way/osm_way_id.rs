use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// OSM way identifier. not unique across a dataset of conflated ways, since
/// a merged graph edge may reference several ways and a way may be split
/// across several rows.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct OsmWayId(pub i64);

impl Display for OsmWayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OsmWayId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(OsmWayId)
            .map_err(|e| format!("invalid way id '{s}': {e}"))
    }
}
