use itertools::Itertools;

/// a raw OSM tag value. ways conflated from several OSM elements carry an
/// ordered sequence of values, which arrive as a single delimited string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl TagValue {
    /// a delimiter for aggregated tag values which does not collide with CSV delimiters
    pub const VALUE_DELIMITER: &'static str = ";";

    /// splits a delimited tag string into a [`TagValue`]. blank entries are
    /// dropped, and a string with no remaining entries is treated as absent.
    pub fn from_delimited(value: &str) -> Option<TagValue> {
        let mut entries = value
            .split(Self::VALUE_DELIMITER)
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from)
            .collect_vec();
        match entries.len() {
            0 => None,
            1 => entries.pop().map(TagValue::Scalar),
            _ => Some(TagValue::Sequence(entries)),
        }
    }

    /// the entries of this value, in tag order
    pub fn values(&self) -> &[String] {
        match self {
            TagValue::Scalar(s) => std::slice::from_ref(s),
            TagValue::Sequence(vs) => vs.as_slice(),
        }
    }
}
