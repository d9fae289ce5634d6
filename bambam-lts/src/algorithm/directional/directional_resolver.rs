use super::{PairedAttribute, ResolvedPair};

/// resolves a numeric attribute per side. when neither side is tagged but the
/// combined value is, it is split evenly between the two sides (as with
/// `lanes:both_ways` or `parking:lane:both:width`). otherwise the sides pass
/// through unchanged, even if one of them remains undefined.
pub fn split_numeric(attribute: &PairedAttribute<f64>) -> ResolvedPair<f64> {
    match (attribute.left, attribute.right, attribute.both) {
        (None, None, Some(both)) => {
            let half = both / 2.0;
            ResolvedPair::new(Some(half), Some(half))
        }
        (left, right, _) => ResolvedPair::new(left, right),
    }
}

/// resolves an attribute that describes each side in full, such as a facility
/// type or a lane width. when neither side is tagged but the combined value
/// is, it is copied to both sides. otherwise the sides pass through unchanged.
pub fn copy_categorical<T: Clone>(attribute: &PairedAttribute<T>) -> ResolvedPair<T> {
    match (&attribute.left, &attribute.right, &attribute.both) {
        (None, None, Some(both)) => ResolvedPair::new(Some(both.clone()), Some(both.clone())),
        (left, right, _) => ResolvedPair::new(left.clone(), right.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_both_evenly() {
        let lanes = PairedAttribute::new(None, None, Some(4.0));
        let resolved = split_numeric(&lanes);
        assert_eq!(resolved, ResolvedPair::new(Some(2.0), Some(2.0)));
    }

    #[test]
    fn test_no_split_when_one_side_defined() {
        // forward is tagged, so backward stays undefined
        let lanes = PairedAttribute::new(None, Some(1.0), Some(4.0));
        let resolved = split_numeric(&lanes);
        assert_eq!(resolved, ResolvedPair::new(None, Some(1.0)));
    }

    #[test]
    fn test_split_odd_count() {
        let lanes = PairedAttribute::new(None, None, Some(3.0));
        let resolved = split_numeric(&lanes);
        assert_eq!(resolved, ResolvedPair::new(Some(1.5), Some(1.5)));
    }

    #[test]
    fn test_nothing_tagged() {
        let lanes: PairedAttribute<f64> = PairedAttribute::default();
        assert_eq!(split_numeric(&lanes), ResolvedPair::default());
    }

    #[test]
    fn test_copy_both() {
        let cycleway = PairedAttribute::new(None, None, Some(String::from("lane")));
        let resolved = copy_categorical(&cycleway);
        assert_eq!(
            resolved,
            ResolvedPair::new(Some(String::from("lane")), Some(String::from("lane")))
        );
    }

    #[test]
    fn test_copy_passes_through_sides() {
        let parking = PairedAttribute::new(
            Some(String::from("parallel")),
            None,
            Some(String::from("no")),
        );
        let resolved = copy_categorical(&parking);
        assert_eq!(resolved, ResolvedPair::new(Some(String::from("parallel")), None));
    }

    #[test]
    fn test_copy_width_is_not_halved() {
        let width = PairedAttribute::new(None, None, Some(6.0));
        let resolved = copy_categorical(&width);
        assert_eq!(resolved, ResolvedPair::new(Some(6.0), Some(6.0)));
    }
}
