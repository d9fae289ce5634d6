use crate::model::{lts::Side, way::LtsWay};
use std::fmt::Display;

/// numeric way attributes that may be filled from the class median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericAttribute {
    Maxspeed,
    Lanes(Side),
    CyclewayWidth(Side),
    ParkingWidth(Side),
}

/// categorical way attributes that may be filled from the class mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalAttribute {
    Cycleway(Side),
    Parking(Side),
}

impl NumericAttribute {
    pub const ALL: [NumericAttribute; 7] = [
        NumericAttribute::Maxspeed,
        NumericAttribute::Lanes(Side::Left),
        NumericAttribute::Lanes(Side::Right),
        NumericAttribute::CyclewayWidth(Side::Left),
        NumericAttribute::CyclewayWidth(Side::Right),
        NumericAttribute::ParkingWidth(Side::Left),
        NumericAttribute::ParkingWidth(Side::Right),
    ];

    /// the value observed on this way, if any
    pub fn observed(&self, way: &LtsWay) -> Option<f64> {
        match self {
            NumericAttribute::Maxspeed => way.maxspeed,
            NumericAttribute::Lanes(side) => way.lanes.get(*side).copied(),
            NumericAttribute::CyclewayWidth(side) => way.cycleway_width.get(*side).copied(),
            NumericAttribute::ParkingWidth(side) => way.parking_width.get(*side).copied(),
        }
    }
}

impl CategoricalAttribute {
    pub const ALL: [CategoricalAttribute; 4] = [
        CategoricalAttribute::Cycleway(Side::Left),
        CategoricalAttribute::Cycleway(Side::Right),
        CategoricalAttribute::Parking(Side::Left),
        CategoricalAttribute::Parking(Side::Right),
    ];

    pub fn observed<'a>(&self, way: &'a LtsWay) -> Option<&'a str> {
        match self {
            CategoricalAttribute::Cycleway(side) => way.cycleway.get(*side).map(String::as_str),
            CategoricalAttribute::Parking(side) => way.parking.get(*side).map(String::as_str),
        }
    }
}

impl Display for NumericAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericAttribute::Maxspeed => write!(f, "maxspeed"),
            NumericAttribute::Lanes(side) => write!(f, "lanes:{}", side.lane_direction()),
            NumericAttribute::CyclewayWidth(side) => write!(f, "cycleway:{side}:width"),
            NumericAttribute::ParkingWidth(side) => write!(f, "parking:lane:{side}:width"),
        }
    }
}

impl Display for CategoricalAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoricalAttribute::Cycleway(side) => write!(f, "cycleway:{side}"),
            CategoricalAttribute::Parking(side) => write!(f, "parking:lane:{side}"),
        }
    }
}
