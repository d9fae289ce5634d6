use crate::model::lts::RoadClass;

/// last-resort values for road classes rated by the detailed LTS method, used
/// when an attribute is missing and the class is too sparsely tagged to
/// impute it from the observed ways. speeds are in mph, widths in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAuthoredDefaults {
    pub speed: f64,
    pub lanes: f64,
    pub parking: &'static str,
    pub parking_width: f64,
    pub bike_width_park: f64,
    pub bike_width_nopark: f64,
}

impl HandAuthoredDefaults {
    const ARTERIAL: HandAuthoredDefaults = HandAuthoredDefaults {
        speed: 40.0,
        lanes: 2.0,
        parking: "Y",
        parking_width: 8.0,
        bike_width_park: 5.0,
        bike_width_nopark: 4.0,
    };
    const COLLECTOR: HandAuthoredDefaults = HandAuthoredDefaults {
        speed: 30.0,
        lanes: 1.0,
        ..HandAuthoredDefaults::ARTERIAL
    };
    const LOCAL: HandAuthoredDefaults = HandAuthoredDefaults {
        speed: 25.0,
        lanes: 1.0,
        ..HandAuthoredDefaults::ARTERIAL
    };

    pub fn for_road_class(road_class: &RoadClass) -> Option<HandAuthoredDefaults> {
        use RoadClass as RC;
        match road_class {
            RC::Primary | RC::PrimaryLink | RC::Secondary | RC::SecondaryLink => {
                Some(Self::ARTERIAL)
            }
            RC::Tertiary | RC::TertiaryLink => Some(Self::COLLECTOR),
            RC::Unclassified | RC::Residential => Some(Self::LOCAL),
            _ => None,
        }
    }

    /// fallback width of the bike lane itself, which is narrower next to parking
    pub fn bike_width(&self, has_parking: bool) -> f64 {
        if has_parking {
            self.bike_width_park
        } else {
            self.bike_width_nopark
        }
    }
}
