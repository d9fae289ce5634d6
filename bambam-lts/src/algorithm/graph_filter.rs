use crate::{
    algorithm::aggregation::WayLtsLookup,
    config::{LtsConfiguration, OutputMethod},
    model::{
        graph::{EdgeRow, LtsEdge},
        lts::{LtsError, LtsLevel},
    },
};
use kdam::tqdm;
use std::fmt::Display;

/// applies LTS ratings to a routable graph, either removing edges that are
/// too stressful (exclusive) or penalizing their traversal weight (preferred).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphFilter {
    pub output_method: OutputMethod,
    pub threshold: LtsLevel,
    pub preference_multiplier: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub n_edges: usize,
    pub n_retained: usize,
    pub n_penalized: usize,
    pub n_dropped_unrated: usize,
    pub n_dropped_threshold: usize,
    /// edges with unreadable way ids or a negative or non-finite length
    pub n_dropped_invalid: usize,
}

impl Display for FilterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} edges: {} retained ({} penalized), {} dropped without a rating, {} dropped above threshold, {} dropped as invalid",
            self.n_edges,
            self.n_retained,
            self.n_penalized,
            self.n_dropped_unrated,
            self.n_dropped_threshold,
            self.n_dropped_invalid
        )
    }
}

impl GraphFilter {
    pub fn new(
        output_method: OutputMethod,
        threshold: LtsLevel,
        preference_multiplier: f64,
    ) -> GraphFilter {
        GraphFilter {
            output_method,
            threshold,
            preference_multiplier,
        }
    }

    /// the weight of traversing an edge of this level and length, or None
    /// if the edge is removed from the graph. unrated edges are always removed.
    pub fn traversal_weight(&self, lts: Option<LtsLevel>, length: f64) -> Option<f64> {
        let lts = lts?;
        match self.output_method {
            OutputMethod::Exclusive if lts <= self.threshold => Some(length),
            OutputMethod::Exclusive => None,
            OutputMethod::Preferred if lts > self.threshold => {
                Some(length * self.preference_multiplier)
            }
            OutputMethod::Preferred => Some(length),
        }
    }

    /// rates each edge by the worst of its ways and keeps those the output
    /// method retains, in input order. edges with unreadable way ids or an
    /// invalid length are logged and dropped.
    pub fn apply(
        &self,
        edges: Vec<EdgeRow>,
        lookup: &WayLtsLookup,
    ) -> Result<(Vec<LtsEdge>, FilterSummary), LtsError> {
        let mut summary = FilterSummary {
            n_edges: edges.len(),
            ..Default::default()
        };
        let mut retained = Vec::with_capacity(edges.len());
        let n_edges = edges.len();
        let iter = tqdm!(
            edges.into_iter(),
            total = n_edges,
            desc = format!("{} graph filter", self.output_method)
        );
        for edge in iter {
            let way_ids = match edge.get_way_ids() {
                Ok(ids) => ids,
                Err(e) => {
                    log::warn!("dropping edge {} with unreadable way ids: {e}", edge.edge_id);
                    summary.n_dropped_invalid += 1;
                    continue;
                }
            };
            let length = edge.get_length_meters();
            if !length.is_finite() || length < 0.0 {
                log::warn!("dropping edge {} with invalid length {length}", edge.edge_id);
                summary.n_dropped_invalid += 1;
                continue;
            }
            let Some(lts) = lookup.graph_edge_level(&way_ids) else {
                summary.n_dropped_unrated += 1;
                continue;
            };
            match self.traversal_weight(Some(lts), length) {
                Some(weight) => {
                    if lts > self.threshold {
                        summary.n_penalized += 1;
                    }
                    summary.n_retained += 1;
                    retained.push(LtsEdge::new(edge, lts, weight));
                }
                None => summary.n_dropped_threshold += 1,
            }
        }
        eprintln!();
        Ok((retained, summary))
    }
}

impl From<&LtsConfiguration> for GraphFilter {
    fn from(conf: &LtsConfiguration) -> Self {
        GraphFilter::new(
            conf.output_method,
            conf.lts_threshold,
            conf.preference_multiplier,
        )
    }
}
