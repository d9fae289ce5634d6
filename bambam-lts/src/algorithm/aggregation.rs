use crate::{
    algorithm::classification::LtsClassifier,
    model::{
        lts::{LtsError, LtsLevel, RoadClass, Side},
        way::{LtsWay, OsmWayId},
    },
};
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fmt::Display,
    sync::{Arc, Mutex},
};

/// the classification of one way, one row of the way LTS output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WayLts {
    pub way_id: OsmWayId,
    pub road_class: RoadClass,
    pub lts_left: Option<LtsLevel>,
    pub lts_right: Option<LtsLevel>,
    pub lts: Option<LtsLevel>,
}

/// the worst of the defined levels, or None if no level is defined.
pub fn max_defined(levels: impl IntoIterator<Item = Option<LtsLevel>>) -> Option<LtsLevel> {
    levels.into_iter().flatten().max()
}

/// classifies both sides of a way. the way is rated by its more stressful side.
pub fn edge_level(classifier: &dyn LtsClassifier, way: &LtsWay) -> Result<WayLts, LtsError> {
    let lts_left = classifier.classify(way, Side::Left)?;
    let lts_right = classifier.classify(way, Side::Right)?;
    Ok(WayLts {
        way_id: way.id,
        road_class: way.road_class.clone(),
        lts_left,
        lts_right,
        lts: max_defined([lts_left, lts_right]),
    })
}

/// way id to LTS lookup used to rate graph edges. rows sharing a way id are
/// merged by keeping their worst level.
#[derive(Debug, Clone, Default)]
pub struct WayLtsLookup(HashMap<OsmWayId, LtsLevel>);

impl WayLtsLookup {
    pub fn insert(&mut self, way_id: OsmWayId, level: LtsLevel) {
        self.0
            .entry(way_id)
            .and_modify(|existing| *existing = (*existing).max(level))
            .or_insert(level);
    }

    pub fn get(&self, way_id: &OsmWayId) -> Option<LtsLevel> {
        self.0.get(way_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// the level of a graph edge built from one or more ways is the worst
    /// level among its rated ways. unknown way ids are ignored.
    pub fn graph_edge_level(&self, way_ids: &[OsmWayId]) -> Option<LtsLevel> {
        max_defined(way_ids.iter().map(|id| self.get(id)))
    }
}

impl FromIterator<(OsmWayId, LtsLevel)> for WayLtsLookup {
    fn from_iter<T: IntoIterator<Item = (OsmWayId, LtsLevel)>>(iter: T) -> Self {
        let mut lookup = WayLtsLookup::default();
        for (way_id, level) in iter {
            lookup.insert(way_id, level);
        }
        lookup
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub n_ways: usize,
    pub n_rated: usize,
    pub n_unrated: usize,
    /// ways with unparsable tags, plus input rows that could not be read at all
    pub n_invalid_tag: usize,
    pub n_unsupported_class: usize,
    pub n_imputation_gap: usize,
}

impl ClassificationSummary {
    pub fn n_excluded(&self) -> usize {
        self.n_invalid_tag + self.n_unsupported_class + self.n_imputation_gap
    }
}

impl Display for ClassificationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ways: {} rated, {} unrated, {} excluded ({} invalid tags, {} unsupported road classes, {} missing attributes)",
            self.n_ways,
            self.n_rated,
            self.n_unrated,
            self.n_excluded(),
            self.n_invalid_tag,
            self.n_unsupported_class,
            self.n_imputation_gap
        )
    }
}

pub struct ClassificationResult {
    pub ways: Vec<WayLts>,
    pub lookup: WayLtsLookup,
    pub summary: ClassificationSummary,
}

/// classifies every way. ways that fail with a data error are logged and
/// excluded; any other error fails the whole batch.
pub fn classify_ways(
    classifier: &dyn LtsClassifier,
    ways: &[LtsWay],
    parallelize: bool,
) -> Result<ClassificationResult, LtsError> {
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .total(ways.len())
            .desc(format!("{} LTS", classifier.method()))
            .build()
            .map_err(LtsError::InternalError)?,
    ));
    let classify_one = |way: &LtsWay| {
        if let Ok(mut b) = bar.clone().lock() {
            let _ = b.update(1);
        }
        edge_level(classifier, way)
    };
    let results: Vec<Result<WayLts, LtsError>> = if parallelize {
        ways.par_iter().map(classify_one).collect()
    } else {
        ways.iter().map(classify_one).collect()
    };
    eprintln!();

    let mut summary = ClassificationSummary {
        n_ways: ways.len(),
        ..Default::default()
    };
    let mut rated = Vec::with_capacity(results.len());
    let mut lookup = WayLtsLookup::default();
    for result in results.into_iter() {
        match result {
            Ok(way_lts) => {
                match way_lts.lts {
                    Some(level) => {
                        lookup.insert(way_lts.way_id, level);
                        summary.n_rated += 1;
                    }
                    None => summary.n_unrated += 1,
                }
                rated.push(way_lts);
            }
            Err(e @ LtsError::UnsupportedRoadClass(..)) => {
                log::debug!("excluding way: {e}");
                summary.n_unsupported_class += 1;
            }
            Err(e @ LtsError::ImputationGap(..)) => {
                log::warn!("excluding way: {e}");
                summary.n_imputation_gap += 1;
            }
            Err(e @ LtsError::InvalidTag { .. }) => {
                log::warn!("excluding way: {e}");
                summary.n_invalid_tag += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(ClassificationResult {
        ways: rated,
        lookup,
        summary,
    })
}
