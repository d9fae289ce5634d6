use crate::model::lts::Side;

/// one attribute tagged per side of a way along with its combined "both" tag,
/// as normalized from OSM but before directional resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairedAttribute<T> {
    pub left: Option<T>,
    pub right: Option<T>,
    pub both: Option<T>,
}

impl<T> PairedAttribute<T> {
    pub fn new(left: Option<T>, right: Option<T>, both: Option<T>) -> PairedAttribute<T> {
        PairedAttribute { left, right, both }
    }
}

/// an attribute resolved to a value (or none) per side of a way.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPair<T> {
    pub left: Option<T>,
    pub right: Option<T>,
}

impl<T> ResolvedPair<T> {
    pub fn new(left: Option<T>, right: Option<T>) -> ResolvedPair<T> {
        ResolvedPair { left, right }
    }

    pub fn get(&self, side: Side) -> Option<&T> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }
}

impl<T> Default for ResolvedPair<T> {
    fn default() -> Self {
        ResolvedPair {
            left: None,
            right: None,
        }
    }
}
