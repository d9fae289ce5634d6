use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt::Display, str::FromStr};

/// the OSM highway classes understood by the LTS classifiers, listed in
/// hierarchy order (most to least car-oriented). any other highway tag
/// value is carried as [`RoadClass::Unsupported`] and excluded from classification.
///
/// see https://wiki.openstreetmap.org/wiki/Key:highway
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoadClass {
    Motorway,
    MotorwayLink,
    Trunk,
    TrunkLink,
    Primary,
    PrimaryLink,
    Secondary,
    SecondaryLink,
    Tertiary,
    TertiaryLink,
    Unclassified,
    Residential,
    Path,
    LivingStreet,
    // only rated by the conveyal method
    Cycleway,
    Track,
    Pedestrian,
    Service,
    Unsupported(String),
}

impl RoadClass {
    /// rank used to pick the most conservative class when a way carries
    /// several highway tags. lower values dominate.
    pub fn hierarchy(&self) -> usize {
        use RoadClass as RC;
        match self {
            RC::Motorway => 0,
            RC::MotorwayLink => 1,
            RC::Trunk => 2,
            RC::TrunkLink => 3,
            RC::Primary => 4,
            RC::PrimaryLink => 5,
            RC::Secondary => 6,
            RC::SecondaryLink => 7,
            RC::Tertiary => 8,
            RC::TertiaryLink => 9,
            RC::Unclassified => 10,
            RC::Residential => 11,
            RC::Path => 12,
            RC::LivingStreet => 13,
            RC::Cycleway => 14,
            RC::Track => 15,
            RC::Pedestrian => 16,
            RC::Service => 17,
            RC::Unsupported(_) => usize::MAX,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, RoadClass::Unsupported(_))
    }

    pub fn as_str(&self) -> &str {
        use RoadClass as RC;
        match self {
            RC::Motorway => "motorway",
            RC::MotorwayLink => "motorway_link",
            RC::Trunk => "trunk",
            RC::TrunkLink => "trunk_link",
            RC::Primary => "primary",
            RC::PrimaryLink => "primary_link",
            RC::Secondary => "secondary",
            RC::SecondaryLink => "secondary_link",
            RC::Tertiary => "tertiary",
            RC::TertiaryLink => "tertiary_link",
            RC::Unclassified => "unclassified",
            RC::Residential => "residential",
            RC::Path => "path",
            RC::LivingStreet => "living_street",
            RC::Cycleway => "cycleway",
            RC::Track => "track",
            RC::Pedestrian => "pedestrian",
            RC::Service => "service",
            RC::Unsupported(s) => s.as_str(),
        }
    }
}

impl Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoadClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use RoadClass as RC;
        let road_class = match s.trim() {
            "motorway" => RC::Motorway,
            "motorway_link" => RC::MotorwayLink,
            "trunk" => RC::Trunk,
            "trunk_link" => RC::TrunkLink,
            "primary" => RC::Primary,
            "primary_link" => RC::PrimaryLink,
            "secondary" => RC::Secondary,
            "secondary_link" => RC::SecondaryLink,
            "tertiary" => RC::Tertiary,
            "tertiary_link" => RC::TertiaryLink,
            "unclassified" => RC::Unclassified,
            "residential" => RC::Residential,
            "path" => RC::Path,
            "living_street" => RC::LivingStreet,
            "cycleway" => RC::Cycleway,
            "track" => RC::Track,
            "pedestrian" => RC::Pedestrian,
            "service" => RC::Service,
            other => RC::Unsupported(String::from(other)),
        };
        Ok(road_class)
    }
}

impl From<String> for RoadClass {
    fn from(value: String) -> Self {
        match RoadClass::from_str(&value) {
            Ok(road_class) => road_class,
            Err(never) => match never {},
        }
    }
}

impl From<RoadClass> for String {
    fn from(value: RoadClass) -> Self {
        value.to_string()
    }
}
