use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// direction of travel along a way used when classifying it. OSM tags lane
/// counts as forward/backward and bike/parking facilities as left/right; the
/// right side is paired with the forward lanes and the left side with the
/// backward lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// the OSM lane direction suffix matching this side
    pub fn lane_direction(&self) -> &'static str {
        match self {
            Side::Left => "backward",
            Side::Right => "forward",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}
