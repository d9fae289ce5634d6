use super::{OsmWayId, RawWayRow, TagValue};
use crate::{
    algorithm::{
        directional::{self, PairedAttribute, ResolvedPair},
        normalization::{tag_normalizer, FacilitySet},
    },
    model::lts::{LtsError, RoadClass},
};

/// an OSM way with its tags normalized to scalars and resolved per side.
/// built once from the input rows and read-only afterward.
#[derive(Debug, Clone)]
pub struct LtsWay {
    pub id: OsmWayId,
    pub road_class: RoadClass,
    /// speed limit in mph
    pub maxspeed: Option<f64>,
    /// total lane count, only used by the conveyal method
    pub lanes_total: Option<f64>,
    /// lanes per side, where left holds backward lanes and right holds forward lanes
    pub lanes: ResolvedPair<f64>,
    pub cycleway: ResolvedPair<String>,
    pub cycleway_width: ResolvedPair<f64>,
    pub cycleway_buffer: ResolvedPair<String>,
    pub parking: ResolvedPair<String>,
    pub parking_width: ResolvedPair<f64>,
    /// true if any cycleway tag is present with a value other than "no"
    pub has_cycle_tag: bool,
}

impl LtsWay {
    pub fn new(row: &RawWayRow, ignore_invalid_entries: bool) -> Result<LtsWay, LtsError> {
        let tag = |field: &str| -> Result<Option<TagValue>, LtsError> {
            row.get_tag_at_field(field)
                .map_err(LtsError::InternalError)
        };
        type NumericOp = fn(Option<&TagValue>, bool) -> Result<Option<f64>, String>;
        let numeric = |field: &str, op: NumericOp| -> Result<Option<f64>, LtsError> {
            let value = tag(field)?;
            op(value.as_ref(), ignore_invalid_entries).map_err(|message| LtsError::InvalidTag {
                way_id: row.id,
                tag: String::from(field),
                message,
            })
        };
        let bike_facilities = FacilitySet::bike_facilities();
        let parking_facilities = FacilitySet::parking();

        let road_class = tag_normalizer::normalize_road_class(tag("highway")?.as_ref());
        let maxspeed = numeric("maxspeed", tag_normalizer::normalize_speed)?;

        // LANES
        let lanes_forward = numeric("lanes_forward", tag_normalizer::normalize_lanes)?;
        let lanes_backward = numeric("lanes_backward", tag_normalizer::normalize_lanes)?;
        let lanes_both = numeric("lanes_both", tag_normalizer::normalize_lanes)?;
        let lanes_total = numeric("lanes", tag_normalizer::normalize_lanes)?
            .or_else(|| match (lanes_forward, lanes_backward) {
                (None, None) => None,
                (f, b) => Some(f.unwrap_or_default() + b.unwrap_or_default()),
            })
            .or(lanes_both);
        let lanes = directional::split_numeric(&PairedAttribute::new(
            lanes_backward,
            lanes_forward,
            lanes_both,
        ));

        // BIKE FACILITIES
        let facility = |field: &str| -> Result<Option<String>, LtsError> {
            Ok(tag_normalizer::normalize_facility(
                tag(field)?.as_ref(),
                &bike_facilities,
            ))
        };
        // an untyped cycleway tag applies to both sides unless it marks a crossing
        let cycleway_generic = facility("cycleway")?.filter(|c| c != "crossing");
        let cycleway = directional::copy_categorical(&PairedAttribute::new(
            facility("cycleway_left")?,
            facility("cycleway_right")?,
            facility("cycleway_both")?.or(cycleway_generic),
        ));
        // a combined width is the width of each lane
        let cycleway_width = directional::copy_categorical(&PairedAttribute::new(
            numeric("cycleway_left_width", tag_normalizer::normalize_width)?,
            numeric("cycleway_right_width", tag_normalizer::normalize_width)?,
            numeric("cycleway_both_width", tag_normalizer::normalize_width)?,
        ));
        let buffer = |field: &str| -> Result<Option<String>, LtsError> {
            Ok(tag_normalizer::normalize_category(tag(field)?.as_ref(), |b| b != "no"))
        };
        let cycleway_buffer = directional::copy_categorical(&PairedAttribute::new(
            buffer("cycleway_left_buffer")?,
            buffer("cycleway_right_buffer")?,
            buffer("cycleway_both_buffer")?,
        ));
        let has_cycle_tag = ["cycleway", "cycleway_left", "cycleway_right", "cycleway_both"]
            .into_iter()
            .map(tag)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .any(|t| t.values().iter().any(|v| v != "no"));

        // PARKING
        let parking_lane = |field: &str| -> Result<Option<String>, LtsError> {
            Ok(tag_normalizer::normalize_facility(
                tag(field)?.as_ref(),
                &parking_facilities,
            ))
        };
        let parking = directional::copy_categorical(&PairedAttribute::new(
            parking_lane("parking_left")?,
            parking_lane("parking_right")?,
            parking_lane("parking_both")?,
        ));
        let parking_width = directional::split_numeric(&PairedAttribute::new(
            numeric("parking_left_width", tag_normalizer::normalize_width)?,
            numeric("parking_right_width", tag_normalizer::normalize_width)?,
            numeric("parking_both_width", tag_normalizer::normalize_width)?,
        ));

        Ok(LtsWay {
            id: row.id,
            road_class,
            maxspeed,
            lanes_total,
            lanes,
            cycleway,
            cycleway_width,
            cycleway_buffer,
            parking,
            parking_width,
            has_cycle_tag,
        })
    }
}

impl TryFrom<&RawWayRow> for LtsWay {
    type Error = LtsError;

    /// builds a way, treating unparsable numeric tags as undefined
    fn try_from(row: &RawWayRow) -> Result<Self, Self::Error> {
        LtsWay::new(row, true)
    }
}
