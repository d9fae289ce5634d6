use super::{geometry_ops, EdgeRow};
use crate::model::lts::LtsLevel;
use geo::LineString;
use serde::{Deserialize, Serialize};

/// a graph edge retained by the LTS graph filter, with its LTS rating and
/// the traversal weight assigned by the output method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LtsEdge {
    pub edge_id: usize,
    pub src_vertex_id: usize,
    pub dst_vertex_id: usize,
    pub way_ids: String,
    pub length_meters: f64,
    pub lts: LtsLevel,
    pub weight: f64,
    #[serde(
        serialize_with = "geometry_ops::serialize_linestring",
        deserialize_with = "geometry_ops::deserialize_linestring"
    )]
    pub linestring: LineString<f32>,
}

impl LtsEdge {
    pub fn new(row: EdgeRow, lts: LtsLevel, weight: f64) -> LtsEdge {
        let length_meters = row.get_length_meters();
        LtsEdge {
            edge_id: row.edge_id,
            src_vertex_id: row.src_vertex_id,
            dst_vertex_id: row.dst_vertex_id,
            way_ids: row.way_ids,
            length_meters,
            lts,
            weight,
            linestring: row.linestring,
        }
    }
}
