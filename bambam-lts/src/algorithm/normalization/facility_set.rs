use crate::model::way::TagValue;
use std::collections::HashSet;

/// a set of tag values that denote the presence of a facility, such as a
/// bike lane or an on-street parking lane.
#[derive(Debug, Clone)]
pub struct FacilitySet {
    ids: HashSet<String>,
}

impl FacilitySet {
    /// cycleway values that count as a dedicated bike facility
    pub const BIKE_FACILITY_IDS: [&'static str; 2] = ["lane", "track"];
    /// parking lane values that count as parking present
    pub const PARKING_IDS: [&'static str; 4] = ["Y", "parallel", "diagonal", "perpendicular"];

    pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> FacilitySet {
        FacilitySet {
            ids: ids.into_iter().map(String::from).collect(),
        }
    }

    pub fn bike_facilities() -> FacilitySet {
        FacilitySet::new(Self::BIKE_FACILITY_IDS)
    }

    pub fn parking() -> FacilitySet {
        FacilitySet::new(Self::PARKING_IDS)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.ids.contains(value)
    }

    /// true if any entry of the (possibly multi-valued) tag is a member
    pub fn contains_any(&self, value: &TagValue) -> bool {
        value.values().iter().any(|v| self.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::FacilitySet;
    use crate::model::way::TagValue;

    #[test]
    fn test_sequence_matches_any() {
        let bike = FacilitySet::bike_facilities();
        let value = TagValue::from_delimited("no;track").expect("non-empty");
        assert!(bike.contains_any(&value));
        let value = TagValue::from_delimited("no;shared_lane").expect("non-empty");
        assert!(!bike.contains_any(&value));
    }

    #[test]
    fn test_parking_is_case_sensitive() {
        let parking = FacilitySet::parking();
        assert!(parking.contains("Y"));
        assert!(parking.contains("parallel"));
        assert!(!parking.contains("no_parking"));
        assert!(!parking.contains("y"));
    }
}
