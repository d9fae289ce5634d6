use crate::{algorithm::aggregation::WayLts, model::graph::LtsEdge};

/// the products of an LTS run: one rating per classified way and the
/// filtered, reweighted graph edges.
#[derive(Debug, Clone, Default)]
pub struct LtsOutput {
    pub ways: Vec<WayLts>,
    pub edges: Vec<LtsEdge>,
}
