use super::{OsmWayId, TagValue};
use serde::{Deserialize, Serialize};

/// one row of tagged OSM way data as consumed by the LTS classifiers. all
/// tags are optional and may hold several `;`-delimited values when the row
/// was built from conflated ways. OSM's `:` separated keys are written with
/// `_` here, so `cycleway:left:width` is read from `cycleway_left_width`.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWayRow {
    pub id: OsmWayId,
    #[serde(alias = "road_class", alias = "roadClass")]
    pub highway: Option<String>,
    pub maxspeed: Option<String>,
    pub lanes: Option<String>,
    pub lanes_forward: Option<String>,
    pub lanes_backward: Option<String>,
    #[serde(alias = "lanes_both_ways")]
    pub lanes_both: Option<String>,
    pub cycleway: Option<String>,
    pub cycleway_left: Option<String>,
    pub cycleway_right: Option<String>,
    pub cycleway_both: Option<String>,
    pub cycleway_left_width: Option<String>,
    pub cycleway_right_width: Option<String>,
    pub cycleway_both_width: Option<String>,
    pub cycleway_left_buffer: Option<String>,
    pub cycleway_right_buffer: Option<String>,
    pub cycleway_both_buffer: Option<String>,
    #[serde(alias = "parking_lane_left")]
    pub parking_left: Option<String>,
    #[serde(alias = "parking_lane_right")]
    pub parking_right: Option<String>,
    #[serde(alias = "parking_lane_both")]
    pub parking_both: Option<String>,
    #[serde(alias = "parking_lane_left_width")]
    pub parking_left_width: Option<String>,
    #[serde(alias = "parking_lane_right_width")]
    pub parking_right_width: Option<String>,
    #[serde(alias = "parking_lane_both_width")]
    pub parking_both_width: Option<String>,
}

impl RawWayRow {
    pub fn get_tag_at_field(&self, fieldname: &str) -> Result<Option<TagValue>, String> {
        let raw = match fieldname {
            "highway" => &self.highway,
            "maxspeed" => &self.maxspeed,
            "lanes" => &self.lanes,
            "lanes_forward" => &self.lanes_forward,
            "lanes_backward" => &self.lanes_backward,
            "lanes_both" => &self.lanes_both,
            "cycleway" => &self.cycleway,
            "cycleway_left" => &self.cycleway_left,
            "cycleway_right" => &self.cycleway_right,
            "cycleway_both" => &self.cycleway_both,
            "cycleway_left_width" => &self.cycleway_left_width,
            "cycleway_right_width" => &self.cycleway_right_width,
            "cycleway_both_width" => &self.cycleway_both_width,
            "cycleway_left_buffer" => &self.cycleway_left_buffer,
            "cycleway_right_buffer" => &self.cycleway_right_buffer,
            "cycleway_both_buffer" => &self.cycleway_both_buffer,
            "parking_left" => &self.parking_left,
            "parking_right" => &self.parking_right,
            "parking_both" => &self.parking_both,
            "parking_left_width" => &self.parking_left_width,
            "parking_right_width" => &self.parking_right_width,
            "parking_both_width" => &self.parking_both_width,
            _ => return Err(format!("unknown way field {fieldname}")),
        };
        Ok(raw.as_deref().and_then(TagValue::from_delimited))
    }
}
