use super::{CategoricalAttribute, NumericAttribute};
use crate::model::{
    lts::{LtsError, RoadClass},
    way::LtsWay,
};
use itertools::Itertools;
use kdam::tqdm;
use std::collections::HashMap;

/// the representative value of one attribute over the ways of one road class,
/// along with how often the attribute is missing for that class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStatistic<T> {
    /// median (numeric) or mode (categorical) of the observed values
    pub fallback: Option<T>,
    /// fraction of the class's ways where the attribute is undefined
    pub missing_fraction: f64,
}

impl<T> ClassStatistic<T> {
    fn new(fallback: Option<T>, n_ways: usize, n_observed: usize) -> ClassStatistic<T> {
        let missing_fraction = if n_ways == 0 {
            1.0
        } else {
            (n_ways - n_observed) as f64 / n_ways as f64
        };
        ClassStatistic {
            fallback,
            missing_fraction,
        }
    }
}

/// looks up representative values by road class in order to fill incomplete
/// data taken from OpenStreetMaps, such as missing lane counts or speed limits.
/// built once from the full set of ways before any classification and
/// immutable afterward, so it may be shared freely across worker threads.
#[derive(Debug, Clone)]
pub struct ImputationTable {
    missing_tolerance: f64,
    numeric: HashMap<RoadClass, HashMap<NumericAttribute, ClassStatistic<f64>>>,
    categorical: HashMap<RoadClass, HashMap<CategoricalAttribute, ClassStatistic<String>>>,
}

impl ImputationTable {
    pub const DEFAULT_MISSING_TOLERANCE: f64 = 0.2;

    pub fn new(ways: &[LtsWay], missing_tolerance: f64) -> Result<ImputationTable, LtsError> {
        if !(0.0..=1.0).contains(&missing_tolerance) {
            return Err(LtsError::ConfigurationError(format!(
                "missing tolerance must be in [0, 1], found {missing_tolerance}"
            )));
        }

        let mut buckets: HashMap<&RoadClass, Vec<&LtsWay>> = HashMap::new();
        let way_iter = tqdm!(
            ways.iter(),
            desc = "collect imputation values",
            total = ways.len()
        );
        for way in way_iter {
            buckets.entry(&way.road_class).or_default().push(way);
        }
        eprintln!();

        let mut numeric = HashMap::with_capacity(buckets.len());
        let mut categorical = HashMap::with_capacity(buckets.len());
        for (road_class, class_ways) in buckets.into_iter() {
            let n_ways = class_ways.len();
            let numeric_stats = NumericAttribute::ALL
                .into_iter()
                .map(|attr| {
                    let values = class_ways.iter().flat_map(|w| attr.observed(w)).collect_vec();
                    let stat = ClassStatistic::new(median(&values), n_ways, values.len());
                    (attr, stat)
                })
                .collect::<HashMap<_, _>>();
            let categorical_stats = CategoricalAttribute::ALL
                .into_iter()
                .map(|attr| {
                    let values = class_ways.iter().flat_map(|w| attr.observed(w)).collect_vec();
                    let stat = ClassStatistic::new(mode(&values), n_ways, values.len());
                    (attr, stat)
                })
                .collect::<HashMap<_, _>>();
            log::debug!("built imputation values for {n_ways} '{road_class}' ways");
            numeric.insert(road_class.clone(), numeric_stats);
            categorical.insert(road_class.clone(), categorical_stats);
        }

        Ok(ImputationTable {
            missing_tolerance,
            numeric,
            categorical,
        })
    }

    pub fn missing_tolerance(&self) -> f64 {
        self.missing_tolerance
    }

    pub fn numeric_statistic(
        &self,
        road_class: &RoadClass,
        attribute: NumericAttribute,
    ) -> Option<&ClassStatistic<f64>> {
        self.numeric.get(road_class)?.get(&attribute)
    }

    pub fn categorical_statistic(
        &self,
        road_class: &RoadClass,
        attribute: CategoricalAttribute,
    ) -> Option<&ClassStatistic<String>> {
        self.categorical.get(road_class)?.get(&attribute)
    }

    /// returns the observed value if present. otherwise, if the class is missing
    /// this attribute less often than the tolerance allows, returns the class
    /// median rounded up to the next integer.
    pub fn resolve_numeric(
        &self,
        road_class: &RoadClass,
        attribute: NumericAttribute,
        observed: Option<f64>,
    ) -> Option<f64> {
        if observed.is_some() {
            return observed;
        }
        let stat = self.numeric_statistic(road_class, attribute)?;
        if stat.missing_fraction < self.missing_tolerance {
            stat.fallback.map(f64::ceil)
        } else {
            None
        }
    }

    /// returns the observed value if present, otherwise the class mode when the
    /// class is missing this attribute less often than the tolerance allows.
    pub fn resolve_categorical(
        &self,
        road_class: &RoadClass,
        attribute: CategoricalAttribute,
        observed: Option<&str>,
    ) -> Option<String> {
        if let Some(value) = observed {
            return Some(String::from(value));
        }
        let stat = self.categorical_statistic(road_class, attribute)?;
        if stat.missing_fraction < self.missing_tolerance {
            stat.fallback.clone()
        } else {
            None
        }
    }
}

fn median(values: &[f64]) -> Option<f64> {
    let sorted = values
        .iter()
        .copied()
        .sorted_by(|a, b| a.total_cmp(b))
        .collect_vec();
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        n if n % 2 == 1 => Some(sorted[mid]),
        _ => Some((sorted[mid - 1] + sorted[mid]) / 2.0),
    }
}

/// most frequent value, breaking ties toward the lexicographically smallest.
fn mode(values: &[&str]) -> Option<String> {
    values
        .iter()
        .counts()
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
        .map(|(value, _)| String::from(*value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        lts::Side,
        way::{OsmWayId, RawWayRow},
    };

    fn residential(id: i64, lanes_forward: Option<&str>, parking_right: Option<&str>) -> LtsWay {
        let row = RawWayRow {
            id: OsmWayId(id),
            highway: Some(String::from("residential")),
            lanes_forward: lanes_forward.map(String::from),
            parking_right: parking_right.map(String::from),
            ..Default::default()
        };
        LtsWay::new(&row, false).expect("test invariant: valid way")
    }

    #[test]
    fn test_median_and_mode() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[1.0, 2.0, 4.0, 3.0]), Some(2.5));
        assert_eq!(mode(&["Y", "parallel", "parallel"]), Some(String::from("parallel")));
        assert_eq!(mode(&["parallel", "Y"]), Some(String::from("Y")));
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn test_fill_below_tolerance_rounds_up() {
        // median of [1, 1, 2, 2, 2] forward lanes is 2, and
        // 1 of 6 ways missing (~0.17 < 0.2) so the median fills
        let ways = vec![
            residential(1, Some("1"), None),
            residential(2, Some("1"), None),
            residential(3, Some("2"), None),
            residential(4, Some("2"), None),
            residential(5, Some("2"), None),
            residential(6, None, None),
        ];
        let table = ImputationTable::new(&ways, 0.2).expect("valid table");
        let attr = NumericAttribute::Lanes(Side::Right);
        let stat = table
            .numeric_statistic(&RoadClass::Residential, attr)
            .expect("statistic exists");
        assert_eq!(stat.fallback, Some(2.0));
        assert!((stat.missing_fraction - 1.0 / 6.0).abs() < 1e-9);
        assert_eq!(
            table.resolve_numeric(&RoadClass::Residential, attr, None),
            Some(2.0)
        );
        // observed values pass through untouched
        assert_eq!(
            table.resolve_numeric(&RoadClass::Residential, attr, Some(1.5)),
            Some(1.5)
        );
    }

    #[test]
    fn test_fallback_is_ceiled() {
        let ways = vec![
            residential(1, Some("1"), None),
            residential(2, Some("2"), None),
        ];
        let table = ImputationTable::new(&ways, 0.2).expect("valid table");
        let attr = NumericAttribute::Lanes(Side::Right);
        // median 1.5 rounds up to 2
        assert_eq!(
            table.resolve_numeric(&RoadClass::Residential, attr, None),
            Some(2.0)
        );
    }

    #[test]
    fn test_no_fill_above_tolerance() {
        let ways = vec![
            residential(1, Some("2"), Some("parallel")),
            residential(2, None, None),
        ];
        let table = ImputationTable::new(&ways, 0.2).expect("valid table");
        assert_eq!(
            table.resolve_numeric(&RoadClass::Residential, NumericAttribute::Lanes(Side::Right), None),
            None
        );
        assert_eq!(
            table.resolve_categorical(
                &RoadClass::Residential,
                CategoricalAttribute::Parking(Side::Right),
                None
            ),
            None
        );
        // a tolerance of 1.0 accepts anything that is not entirely missing
        let permissive = ImputationTable::new(&ways, 1.0).expect("valid table");
        assert_eq!(
            permissive.resolve_categorical(
                &RoadClass::Residential,
                CategoricalAttribute::Parking(Side::Right),
                None
            ),
            Some(String::from("parallel"))
        );
    }

    #[test]
    fn test_unknown_class_resolves_nothing() {
        let ways = vec![residential(1, Some("2"), None)];
        let table = ImputationTable::new(&ways, 0.2).expect("valid table");
        assert_eq!(
            table.resolve_numeric(&RoadClass::Primary, NumericAttribute::Maxspeed, None),
            None
        );
    }

    #[test]
    fn test_invalid_tolerance() {
        match ImputationTable::new(&[], 1.5) {
            Err(LtsError::ConfigurationError(_)) => {}
            other => panic!("expected configuration error, found {other:?}"),
        }
    }
}
