use geo::{Convert, Haversine, Length, LineString};
use serde::{Deserialize, Deserializer, Serializer};
use wkt::{ToWkt, Wkt};

/// parses an edge geometry from WKT. surrounding double quotes left over from
/// CSV quoting are ignored.
pub fn parse_wkt_linestring(value: &str) -> Result<LineString<f32>, String> {
    let text = value.trim().trim_matches('"');
    let geometry = text
        .parse::<Wkt<f32>>()
        .map_err(|e| format!("invalid WKT '{text}': {e}"))?;
    LineString::try_from(geometry).map_err(|e| format!("edge geometry must be a LINESTRING: {e}"))
}

pub fn serialize_linestring<S>(linestring: &LineString<f32>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&linestring.wkt_string())
}

pub fn deserialize_linestring<'de, D>(d: D) -> Result<LineString<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(d)?;
    parse_wkt_linestring(&value).map_err(serde::de::Error::custom)
}

/// great-circle length of a WGS84 linestring in meters
pub fn haversine_length_meters(linestring: &LineString<f32>) -> f64 {
    let degrees: LineString<f64> = linestring.convert();
    Haversine.length(&degrees)
}
