use super::LtsClassifier;
use crate::{
    config::LtsMethod,
    model::{
        lts::{LtsError, LtsLevel, RoadClass, Side},
        way::{LtsWay, OsmWayId},
    },
};
use std::collections::HashSet;

/// the four-level method used by Conveyal, scored once per way from road
/// class, speed, total lane count and the presence of any cycleway tag.
/// both sides of a way always share a level.
pub struct ConveyalClassifier {
    cycle_ids: HashSet<OsmWayId>,
}

impl ConveyalClassifier {
    /// collects the ids of every way tagged with a cycleway. since ids may
    /// repeat across rows, a cycleway tag on any row marks all rows sharing its id.
    pub fn new(ways: &[LtsWay]) -> ConveyalClassifier {
        let cycle_ids = ways
            .iter()
            .filter(|w| w.has_cycle_tag)
            .map(|w| w.id)
            .collect();
        ConveyalClassifier { cycle_ids }
    }

    pub fn has_cycle_facility(&self, way: &LtsWay) -> bool {
        self.cycle_ids.contains(&way.id)
    }
}

impl LtsClassifier for ConveyalClassifier {
    fn method(&self) -> LtsMethod {
        LtsMethod::Conveyal
    }

    fn classify(&self, way: &LtsWay, _side: Side) -> Result<Option<LtsLevel>, LtsError> {
        use RoadClass as RC;
        match &way.road_class {
            RC::Service => return Ok(None),
            RC::Cycleway | RC::Path | RC::Track | RC::Pedestrian => return Ok(Some(LtsLevel::Lts1)),
            RC::Residential | RC::LivingStreet => return Ok(Some(LtsLevel::Lts1)),
            RC::Unsupported(_) => {
                return Err(LtsError::UnsupportedRoadClass(
                    way.id,
                    way.road_class.clone(),
                    LtsMethod::Conveyal,
                ))
            }
            _ => {}
        }

        let cycle = self.has_cycle_facility(way);
        let slow = matches!(way.maxspeed, Some(s) if s < 25.0);
        let few_lanes = matches!(way.lanes_total, Some(l) if l < 4.0);
        let minor = matches!(
            way.road_class,
            RC::Unclassified | RC::Tertiary | RC::TertiaryLink
        );

        let level = if slow && (way.lanes_total.is_none() || few_lanes) {
            LtsLevel::Lts2
        } else if minor && (few_lanes || cycle) {
            LtsLevel::Lts2
        } else if cycle {
            LtsLevel::Lts3
        } else {
            LtsLevel::Lts4
        };
        Ok(Some(level))
    }
}

#[cfg(test)]
mod tests {
    use super::ConveyalClassifier;
    use crate::{
        algorithm::classification::LtsClassifier,
        model::{
            lts::{LtsError, LtsLevel, Side},
            way::{LtsWay, OsmWayId, RawWayRow},
        },
    };

    fn way(id: i64, class: &str, maxspeed: Option<&str>, lanes: Option<&str>) -> RawWayRow {
        RawWayRow {
            id: OsmWayId(id),
            highway: Some(String::from(class)),
            maxspeed: maxspeed.map(String::from),
            lanes: lanes.map(String::from),
            ..Default::default()
        }
    }

    fn classify_all(rows: &[RawWayRow]) -> Vec<Option<LtsLevel>> {
        let ways = rows
            .iter()
            .map(|row| LtsWay::new(row, false).expect("test invariant: valid way"))
            .collect::<Vec<_>>();
        let classifier = ConveyalClassifier::new(&ways);
        ways.iter()
            .map(|w| match classifier.classify(w, Side::Right) {
                Ok(level) => level,
                Err(e) => panic!("{e}"),
            })
            .collect()
    }

    #[test]
    fn test_class_fast_paths() {
        let rows = [
            way(1, "service", Some("15"), None),
            way(2, "cycleway", None, None),
            way(3, "pedestrian", None, None),
            way(4, "residential", Some("45"), Some("6")),
            way(5, "living_street", None, None),
        ];
        let expected = vec![
            None,
            Some(LtsLevel::Lts1),
            Some(LtsLevel::Lts1),
            Some(LtsLevel::Lts1),
            Some(LtsLevel::Lts1),
        ];
        assert_eq!(classify_all(&rows), expected);
    }

    #[test]
    fn test_speed_and_lanes() {
        let rows = [
            way(1, "primary", Some("20"), None),
            way(2, "primary", Some("20"), Some("3")),
            way(3, "primary", Some("20"), Some("4")),
            way(4, "primary", Some("30"), Some("2")),
            way(5, "tertiary", Some("30"), Some("2")),
            way(6, "unclassified", Some("30"), None),
        ];
        let expected = vec![
            Some(LtsLevel::Lts2),
            Some(LtsLevel::Lts2),
            Some(LtsLevel::Lts4),
            Some(LtsLevel::Lts4),
            Some(LtsLevel::Lts2),
            Some(LtsLevel::Lts4),
        ];
        assert_eq!(classify_all(&rows), expected);
    }

    #[test]
    fn test_cycle_tag_marks_every_row_with_the_same_id() {
        let tagged = RawWayRow {
            cycleway_right: Some(String::from("lane")),
            ..way(7, "secondary", Some("40"), Some("4"))
        };
        let untagged_duplicate = way(7, "secondary", Some("40"), Some("4"));
        let refused = RawWayRow {
            cycleway: Some(String::from("no")),
            ..way(8, "secondary", Some("40"), Some("4"))
        };
        let minor = RawWayRow {
            cycleway_both: Some(String::from("shared_lane")),
            ..way(9, "tertiary", Some("40"), Some("6"))
        };
        let expected = vec![
            Some(LtsLevel::Lts3),
            Some(LtsLevel::Lts3),
            Some(LtsLevel::Lts4),
            Some(LtsLevel::Lts2),
        ];
        assert_eq!(
            classify_all(&[tagged, untagged_duplicate, refused, minor]),
            expected
        );
    }

    #[test]
    fn test_sides_share_a_level() {
        let row = RawWayRow {
            cycleway_left: Some(String::from("lane")),
            ..way(1, "primary", Some("40"), Some("4"))
        };
        let ways = vec![LtsWay::new(&row, false).expect("test invariant: valid way")];
        let classifier = ConveyalClassifier::new(&ways);
        let left = classifier.classify(&ways[0], Side::Left);
        let right = classifier.classify(&ways[0], Side::Right);
        match (left, right) {
            (Ok(l), Ok(r)) => assert_eq!(l, r),
            (l, r) => panic!("unexpected results {l:?} {r:?}"),
        }
    }

    #[test]
    fn test_unsupported_class() {
        let row = way(1, "busway", None, None);
        let ways = vec![LtsWay::new(&row, false).expect("test invariant: valid way")];
        let classifier = ConveyalClassifier::new(&ways);
        match classifier.classify(&ways[0], Side::Left) {
            Err(LtsError::UnsupportedRoadClass(..)) => {}
            other => panic!("expected unsupported road class, found {other:?}"),
        }
    }
}
