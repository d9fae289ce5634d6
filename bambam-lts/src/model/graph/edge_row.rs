use super::geometry_ops;
use crate::model::way::{OsmWayId, TagValue};
use geo::LineString;
use serde::{Deserialize, Serialize};

/// one edge of the routable graph as read from the edges file. an edge
/// built by simplifying or consolidating the OSM network may be composed
/// of several ways, listed in `way_ids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRow {
    pub edge_id: usize,
    pub src_vertex_id: usize,
    pub dst_vertex_id: usize,
    pub way_ids: String,
    #[serde(default)]
    pub length_meters: Option<f64>,
    #[serde(
        serialize_with = "geometry_ops::serialize_linestring",
        deserialize_with = "geometry_ops::deserialize_linestring"
    )]
    pub linestring: LineString<f32>,
}

impl EdgeRow {
    /// the ways this edge was built from, in the order listed.
    pub fn get_way_ids(&self) -> Result<Vec<OsmWayId>, String> {
        match TagValue::from_delimited(&self.way_ids) {
            None => Ok(vec![]),
            Some(tag) => tag
                .values()
                .iter()
                .map(|v| v.parse::<OsmWayId>())
                .collect(),
        }
    }

    /// the length from the edges file, otherwise the haversine length of the geometry.
    pub fn get_length_meters(&self) -> f64 {
        self.length_meters
            .unwrap_or_else(|| geometry_ops::haversine_length_meters(&self.linestring))
    }
}
