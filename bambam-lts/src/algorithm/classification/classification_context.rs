use crate::{
    algorithm::{
        imputation::{CategoricalAttribute, HandAuthoredDefaults, ImputationTable, NumericAttribute},
        normalization::FacilitySet,
    },
    model::{
        lts::{LtsError, LtsLevel, RoadClass, Side},
        way::LtsWay,
    },
};

/// the attributes of one direction of travel along a way, each resolved to a
/// concrete value from the way's own tags, the class-level imputation table,
/// or the hand-authored defaults, in that order. speeds are in mph, widths in feet.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationContext {
    pub bike_facility: Option<String>,
    pub parking: String,
    pub lanes: f64,
    pub speed: f64,
    /// width available for cycling, including any buffer
    pub cycle_width: f64,
    /// cycling width plus the width of the adjacent parking lane
    pub park_width: f64,
    pub residential: bool,
}

impl ClassificationContext {
    pub fn resolve(
        way: &LtsWay,
        side: Side,
        table: &ImputationTable,
    ) -> Result<ClassificationContext, LtsError> {
        let road_class = &way.road_class;
        let defaults = HandAuthoredDefaults::for_road_class(road_class);
        let gap = |attribute: String| LtsError::ImputationGap(way.id, attribute, road_class.clone());

        let bike_attr = CategoricalAttribute::Cycleway(side);
        let bike_facility = table.resolve_categorical(road_class, bike_attr, bike_attr.observed(way));

        let parking_attr = CategoricalAttribute::Parking(side);
        let parking = table
            .resolve_categorical(road_class, parking_attr, parking_attr.observed(way))
            .or_else(|| defaults.map(|d| String::from(d.parking)))
            .ok_or_else(|| gap(parking_attr.to_string()))?;
        let has_parking = FacilitySet::PARKING_IDS.contains(&parking.as_str());

        let lanes_attr = NumericAttribute::Lanes(side);
        let lanes = table
            .resolve_numeric(road_class, lanes_attr, lanes_attr.observed(way))
            .or_else(|| defaults.map(|d| d.lanes))
            .ok_or_else(|| gap(lanes_attr.to_string()))?;

        let speed_attr = NumericAttribute::Maxspeed;
        let speed = table
            .resolve_numeric(road_class, speed_attr, speed_attr.observed(way))
            .or_else(|| defaults.map(|d| d.speed))
            .ok_or_else(|| gap(speed_attr.to_string()))?;

        let width_attr = NumericAttribute::CyclewayWidth(side);
        let mut cycle_width = table
            .resolve_numeric(road_class, width_attr, width_attr.observed(way))
            .or_else(|| defaults.map(|d| d.bike_width(has_parking)))
            .ok_or_else(|| gap(width_attr.to_string()))?;
        let has_buffer = matches!(way.cycleway_buffer.get(side), Some(b) if b != "no");
        if has_buffer {
            cycle_width += if has_parking { 1.0 } else { 2.0 };
        }

        let parking_width_attr = NumericAttribute::ParkingWidth(side);
        let parking_width = table
            .resolve_numeric(
                road_class,
                parking_width_attr,
                parking_width_attr.observed(way),
            )
            .or_else(|| defaults.map(|d| d.parking_width))
            .ok_or_else(|| gap(parking_width_attr.to_string()))?;

        Ok(ClassificationContext {
            bike_facility,
            parking,
            lanes,
            speed,
            cycle_width,
            park_width: cycle_width + parking_width,
            residential: *road_class == RoadClass::Residential,
        })
    }

    pub fn has_bike_facility(&self) -> bool {
        matches!(&self.bike_facility, Some(f) if FacilitySet::BIKE_FACILITY_IDS.contains(&f.as_str()))
    }

    pub fn has_parking(&self) -> bool {
        FacilitySet::PARKING_IDS.contains(&self.parking.as_str())
    }

    /// the overall level is the worst of the applicable sub-scores.
    pub fn level(&self) -> Option<LtsLevel> {
        let scores = match (self.has_bike_facility(), self.has_parking()) {
            (true, true) => self.bike_lane_with_parking_scores().to_vec(),
            (true, false) => self.bike_lane_scores().to_vec(),
            (false, _) => vec![self.mixed_traffic_score()],
        };
        scores.into_iter().max()
    }

    /// lanes, speed and combined bike + parking lane width scores for a bike
    /// lane alongside parked cars
    pub fn bike_lane_with_parking_scores(&self) -> [LtsLevel; 3] {
        use LtsLevel as L;
        let lanes = if self.lanes > 2.0 { L::Lts3 } else { L::Lts1 };
        let speed = if self.speed > 35.0 {
            L::Lts4
        } else if self.speed > 30.0 {
            L::Lts3
        } else if self.speed > 25.0 {
            L::Lts2
        } else {
            L::Lts1
        };
        let width = if self.park_width >= 15.0 {
            L::Lts1
        } else if self.park_width >= 14.5 {
            L::Lts2
        } else if self.park_width > 13.5 {
            L::Lts3
        } else {
            L::Lts4
        };
        [lanes, speed, width]
    }

    /// lanes, speed and bike lane width scores for a bike lane not next to parking
    pub fn bike_lane_scores(&self) -> [LtsLevel; 3] {
        use LtsLevel as L;
        let lanes = if self.lanes == 1.0 { L::Lts1 } else { L::Lts3 };
        let speed = if self.speed > 35.0 {
            L::Lts4
        } else if self.speed > 30.0 {
            L::Lts3
        } else {
            L::Lts1
        };
        let width = if self.cycle_width >= 6.0 {
            L::Lts1
        } else {
            L::Lts2
        };
        [lanes, speed, width]
    }

    /// score for cycling in mixed traffic, from lane count and speed
    pub fn mixed_traffic_score(&self) -> LtsLevel {
        use LtsLevel as L;
        let quiet_street = self.residential && self.lanes < 3.0;
        if self.lanes <= 3.0 {
            if self.speed <= 25.0 {
                if quiet_street {
                    L::Lts1
                } else {
                    L::Lts2
                }
            } else if self.speed <= 30.0 {
                if quiet_street {
                    L::Lts2
                } else {
                    L::Lts3
                }
            } else {
                L::Lts4
            }
        } else if self.lanes <= 5.0 {
            if self.speed <= 25.0 {
                L::Lts3
            } else {
                L::Lts4
            }
        } else {
            L::Lts4
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClassificationContext;
    use crate::model::lts::LtsLevel;

    fn context(bike: Option<&str>, parking: &str) -> ClassificationContext {
        ClassificationContext {
            bike_facility: bike.map(String::from),
            parking: String::from(parking),
            lanes: 1.0,
            speed: 25.0,
            cycle_width: 6.0,
            park_width: 15.0,
            residential: false,
        }
    }

    #[test]
    fn test_with_parking_width_thresholds() {
        let expected = [
            (15.0, LtsLevel::Lts1),
            (14.5, LtsLevel::Lts2),
            (14.0, LtsLevel::Lts3),
            (13.5, LtsLevel::Lts4),
        ];
        for (park_width, level) in expected {
            let ctx = ClassificationContext {
                park_width,
                ..context(Some("lane"), "parallel")
            };
            assert_eq!(ctx.level(), Some(level), "park_width {park_width}");
        }
    }

    #[test]
    fn test_with_parking_speed_thresholds() {
        let expected = [
            (25.0, LtsLevel::Lts1),
            (30.0, LtsLevel::Lts2),
            (35.0, LtsLevel::Lts3),
            (40.0, LtsLevel::Lts4),
        ];
        for (speed, level) in expected {
            let ctx = ClassificationContext {
                speed,
                ..context(Some("track"), "Y")
            };
            assert_eq!(ctx.level(), Some(level), "speed {speed}");
        }
    }

    #[test]
    fn test_without_parking() {
        let ctx = context(Some("lane"), "no");
        assert_eq!(ctx.bike_lane_scores(), [LtsLevel::Lts1; 3]);
        let narrow = ClassificationContext {
            cycle_width: 5.0,
            ..context(Some("lane"), "no")
        };
        assert_eq!(narrow.level(), Some(LtsLevel::Lts2));
        let two_lanes = ClassificationContext {
            lanes: 2.0,
            ..context(Some("lane"), "no")
        };
        assert_eq!(two_lanes.level(), Some(LtsLevel::Lts3));
        // no intermediate speed step without parking
        let thirty = ClassificationContext {
            speed: 30.0,
            ..context(Some("lane"), "no")
        };
        assert_eq!(thirty.level(), Some(LtsLevel::Lts1));
    }

    #[test]
    fn test_shared_lane_is_mixed_traffic() {
        let ctx = context(Some("shared_lane"), "Y");
        assert!(!ctx.has_bike_facility());
        assert_eq!(ctx.level(), Some(LtsLevel::Lts2));
    }

    #[test]
    fn test_mixed_traffic() {
        let residential = ClassificationContext {
            residential: true,
            lanes: 2.0,
            ..context(None, "Y")
        };
        assert_eq!(residential.mixed_traffic_score(), LtsLevel::Lts1);
        let residential_30 = ClassificationContext {
            speed: 30.0,
            ..residential.clone()
        };
        assert_eq!(residential_30.mixed_traffic_score(), LtsLevel::Lts2);
        let wide_residential = ClassificationContext {
            lanes: 3.0,
            ..residential.clone()
        };
        assert_eq!(wide_residential.mixed_traffic_score(), LtsLevel::Lts2);
        let four_lanes = ClassificationContext {
            lanes: 4.0,
            ..residential.clone()
        };
        assert_eq!(four_lanes.mixed_traffic_score(), LtsLevel::Lts3);
        let four_lanes_fast = ClassificationContext {
            speed: 30.0,
            ..four_lanes
        };
        assert_eq!(four_lanes_fast.mixed_traffic_score(), LtsLevel::Lts4);
        let six_lanes = ClassificationContext {
            lanes: 6.0,
            ..residential
        };
        assert_eq!(six_lanes.mixed_traffic_score(), LtsLevel::Lts4);
    }
}
