//! reduces raw, possibly multi-valued OSM tag values into a single scalar per
//! attribute. every function here returns either a scalar or `None`, never a
//! sequence.
use super::FacilitySet;
use crate::model::{lts::RoadClass, way::TagValue};
use regex::Regex;
use std::{str::FromStr, sync::LazyLock};
use uom::si::f64::{Length, Velocity};
use uom::si::length::{foot, meter};
use uom::si::velocity::{kilometer_per_hour, mile_per_hour};

static RE_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<value>[0-9]+(\.[0-9]+)?)\s*(?P<unit>[A-Za-z/']+)?$")
        .expect("static regex should compile")
});

/// speed limit in miles per hour, taking the maximum over all entries.
///
/// handles entries such as:
///   - 25        (25 mph)
///   - 25 mph    (25 mph)
///   - 40 km/h   (25 mph, rounded)
///
/// entries that are not numeric, such as `none` or `signals`, are invalid.
///
/// see https://wiki.openstreetmap.org/wiki/Key:maxspeed
pub fn normalize_speed(
    value: Option<&TagValue>,
    ignore_invalid_entries: bool,
) -> Result<Option<f64>, String> {
    max_over_entries(value, ignore_invalid_entries, parse_speed_mph)
}

/// lane count as an integer, taking the maximum over all entries.
pub fn normalize_lanes(
    value: Option<&TagValue>,
    ignore_invalid_entries: bool,
) -> Result<Option<f64>, String> {
    max_over_entries(value, ignore_invalid_entries, |entry| {
        entry
            .trim()
            .parse::<i64>()
            .map(|lanes| lanes as f64)
            .map_err(|e| format!("lane count '{entry}' is not an integer: {e}"))
    })
}

/// facility width in feet, taking the maximum over all entries. a unitless
/// value is read as feet, so `width=2` is 2 ft. values tagged `m` are
/// converted from meters.
pub fn normalize_width(
    value: Option<&TagValue>,
    ignore_invalid_entries: bool,
) -> Result<Option<f64>, String> {
    max_over_entries(value, ignore_invalid_entries, parse_width_feet)
}

/// a categorical tag value. when multi-valued, the first entry accepted by
/// `preferred` wins, falling back to the first entry.
pub fn normalize_category(
    value: Option<&TagValue>,
    preferred: impl Fn(&str) -> bool,
) -> Option<String> {
    let values = value?.values();
    values
        .iter()
        .find(|v| preferred(v))
        .or_else(|| values.first())
        .cloned()
}

/// a categorical facility tag, preferring entries that are members of the facility set.
pub fn normalize_facility(value: Option<&TagValue>, facilities: &FacilitySet) -> Option<String> {
    normalize_category(value, |v| facilities.contains(v))
}

/// the most conservative supported road class among the highway tag entries.
/// if no entry is supported, the first entry is carried as [`RoadClass::Unsupported`].
pub fn normalize_road_class(value: Option<&TagValue>) -> RoadClass {
    let Some(tag) = value else {
        return RoadClass::Unsupported(String::new());
    };
    let classes = tag
        .values()
        .iter()
        .map(|v| RoadClass::from(v.clone()))
        .collect::<Vec<RoadClass>>();
    let top = classes
        .iter()
        .filter(|c| c.is_supported())
        .min_by_key(|c| c.hierarchy())
        .cloned();
    match top {
        Some(road_class) => road_class,
        None => classes
            .into_iter()
            .next()
            .unwrap_or_else(|| RoadClass::Unsupported(String::new())),
    }
}

/// parses every entry of the tag and keeps the largest value. unparsable
/// entries fail the whole tag unless they are ignored.
fn max_over_entries<F>(
    value: Option<&TagValue>,
    ignore_invalid_entries: bool,
    parse: F,
) -> Result<Option<f64>, String>
where
    F: Fn(&str) -> Result<f64, String>,
{
    let Some(tag) = value else {
        return Ok(None);
    };
    let mut result: Option<f64> = None;
    for entry in tag.values() {
        match parse(entry) {
            Ok(v) => result = Some(result.map_or(v, |r| r.max(v))),
            Err(e) if !ignore_invalid_entries => return Err(e),
            Err(e) => log::debug!("ignoring invalid tag entry: {e}"),
        }
    }
    Ok(result)
}

fn split_quantity(entry: &str) -> Result<(f64, Option<String>), String> {
    let captures = RE_QUANTITY
        .captures(entry.trim())
        .ok_or_else(|| format!("value '{entry}' is not numeric"))?;
    let value_str = captures
        .name("value")
        .map(|m| m.as_str())
        .ok_or_else(|| format!("value '{entry}' is not numeric"))?;
    let value = f64::from_str(value_str)
        .map_err(|e| format!("value '{entry}' is not a valid number: {e}"))?;
    let unit = captures.name("unit").map(|m| m.as_str().to_lowercase());
    Ok((value, unit))
}

fn parse_speed_mph(entry: &str) -> Result<f64, String> {
    let (value, unit) = split_quantity(entry)?;
    match unit.as_deref() {
        None | Some("mph") => Ok(value),
        Some("kph") | Some("km/h") | Some("kmh") => {
            let speed = Velocity::new::<kilometer_per_hour>(value);
            Ok(speed.get::<mile_per_hour>().round())
        }
        Some(other) => Err(format!("unknown speed unit '{other}' in '{entry}'")),
    }
}

fn parse_width_feet(entry: &str) -> Result<f64, String> {
    let (value, unit) = split_quantity(entry)?;
    match unit.as_deref() {
        None | Some("ft") | Some("'") => Ok(value),
        Some("m") => Ok(Length::new::<meter>(value).get::<foot>()),
        Some(other) => Err(format!("unknown width unit '{other}' in '{entry}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> TagValue {
        TagValue::from_delimited(s).expect("test invariant: non-empty tag")
    }

    #[test]
    fn normalize_speed_plain() {
        match normalize_speed(Some(&tag("25")), false) {
            Ok(Some(speed)) => assert_eq!(speed, 25.0),
            Ok(None) => panic!("should parse valid speed"),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn normalize_speed_mph_suffix() {
        match normalize_speed(Some(&tag("35 mph")), false) {
            Ok(Some(speed)) => assert_eq!(speed, 35.0),
            Ok(None) => panic!("should parse valid speed"),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn normalize_speed_kph_converted() {
        match normalize_speed(Some(&tag("40 km/h")), false) {
            Ok(Some(speed)) => assert_eq!(speed, 25.0),
            Ok(None) => panic!("should parse valid speed"),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn normalize_speed_sequence_takes_max() {
        match normalize_speed(Some(&tag("25 mph;35 mph;30")), false) {
            Ok(Some(speed)) => assert_eq!(speed, 35.0),
            Ok(None) => panic!("should parse valid speed"),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn normalize_speed_invalid() {
        assert_eq!(normalize_speed(Some(&tag("signals")), true), Ok(None));
        assert!(normalize_speed(Some(&tag("signals")), false).is_err());
        // valid entries survive when invalid ones are ignored
        assert_eq!(normalize_speed(Some(&tag("none;30")), true), Ok(Some(30.0)));
    }

    #[test]
    fn normalize_speed_absent() {
        assert_eq!(normalize_speed(None, false), Ok(None));
    }

    #[test]
    fn normalize_lanes_sequence_takes_max() {
        assert_eq!(normalize_lanes(Some(&tag("2;4;3")), false), Ok(Some(4.0)));
        assert!(normalize_lanes(Some(&tag("2.5")), false).is_err());
        assert_eq!(normalize_lanes(Some(&tag("2.5")), true), Ok(None));
    }

    #[test]
    fn normalize_width_units() {
        assert_eq!(normalize_width(Some(&tag("5")), false), Ok(Some(5.0)));
        assert_eq!(normalize_width(Some(&tag("6 ft")), false), Ok(Some(6.0)));
        match normalize_width(Some(&tag("2 m")), false) {
            Ok(Some(w)) => assert!((w - 6.5617).abs() < 0.001, "{w} should be ~6.5617 ft"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn normalize_width_unitless_is_feet() {
        // a metric-looking value is not converted without a unit
        assert_eq!(normalize_width(Some(&tag("2")), false), Ok(Some(2.0)));
        assert_eq!(normalize_width(Some(&tag("2'")), false), Ok(Some(2.0)));
        match normalize_width(Some(&tag("2;2 m")), false) {
            Ok(Some(w)) => assert!((w - 6.5617).abs() < 0.001, "{w} should be ~6.5617 ft"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn normalize_facility_prefers_members() {
        let bike = FacilitySet::bike_facilities();
        assert_eq!(
            normalize_facility(Some(&tag("no;lane")), &bike),
            Some(String::from("lane"))
        );
        assert_eq!(
            normalize_facility(Some(&tag("shared_lane;no")), &bike),
            Some(String::from("shared_lane"))
        );
        assert_eq!(normalize_facility(None, &bike), None);
    }

    #[test]
    fn normalize_road_class_most_conservative() {
        let road_class = normalize_road_class(Some(&tag("residential;primary;tertiary")));
        assert_eq!(road_class, RoadClass::Primary);
    }

    #[test]
    fn normalize_road_class_skips_unsupported() {
        let road_class = normalize_road_class(Some(&tag("raceway;residential")));
        assert_eq!(road_class, RoadClass::Residential);
        let road_class = normalize_road_class(Some(&tag("raceway")));
        assert_eq!(road_class, RoadClass::Unsupported(String::from("raceway")));
        assert!(!normalize_road_class(None).is_supported());
    }
}
