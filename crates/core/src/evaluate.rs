//! Static (non-responsive) match evaluation.

use crate::units::Resolver;
use bpquery_types::{Axis, Bound, NormalizedRange, StaticRange};

/// Whether the single assumed viewport falls inside the requested range.
///
/// Only width ranges can match. This is not an interval intersection: a
/// bounded range only counts when it reaches the static range's upper edge.
pub fn static_containment(
    range: &NormalizedRange,
    axis: Axis,
    static_range: &StaticRange,
    resolver: &Resolver<'_>,
) -> bool {
    if axis != Axis::Width {
        return false;
    }

    let valid_min = resolver.resolve(&static_range.min, Bound::Lower);
    let valid_max = resolver.resolve(&static_range.max, Bound::Upper);
    let query_min = resolver.resolve(&range.min, Bound::Lower);
    let query_max = resolver.resolve(&range.max, Bound::Upper);

    // min-and-above
    if !range.has_upper() {
        return query_min >= valid_min && query_min < valid_max;
    }

    // max-and-below
    if !range.has_lower() {
        return query_max >= valid_max;
    }

    if query_min > valid_max || query_max < valid_min {
        return false;
    }

    query_max >= valid_max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::table::BreakpointTable;
    use crate::units::UnitConverter;
    use bpquery_traits::CollectingSink;

    fn contains(range: NormalizedRange, static_range: StaticRange, axis: Axis) -> bool {
        let table = BreakpointTable::derive(&Options::default().breakpoints);
        let sink = CollectingSink::new();
        let resolver = Resolver::new(&table, UnitConverter::new(16.0), &sink);
        static_containment(&range, axis, &static_range, &resolver)
    }

    fn up_to_l() -> StaticRange {
        StaticRange::new(0, "l")
    }

    #[test]
    fn test_min_and_above() {
        assert!(contains(NormalizedRange::new("m", 0), up_to_l(), Axis::Width));
        assert!(contains(NormalizedRange::new("xxs", 0), up_to_l(), Axis::Width));
        assert!(!contains(NormalizedRange::new("xl", 0), up_to_l(), Axis::Width));
    }

    #[test]
    fn test_max_and_below() {
        assert!(contains(NormalizedRange::new(0, "l"), up_to_l(), Axis::Width));
        assert!(contains(NormalizedRange::new(0, "xxl"), up_to_l(), Axis::Width));
        assert!(!contains(NormalizedRange::new(0, "m"), up_to_l(), Axis::Width));
    }

    #[test]
    fn test_between() {
        // Reaches the static upper edge.
        assert!(contains(NormalizedRange::new("m", "l"), up_to_l(), Axis::Width));
        assert!(contains(NormalizedRange::new("s", "xxl"), up_to_l(), Axis::Width));
        // Inside the static range but stops short of its upper edge.
        assert!(!contains(NormalizedRange::new("s", "m"), up_to_l(), Axis::Width));
        // Entirely above.
        assert!(!contains(NormalizedRange::new("xxl", "fhd"), up_to_l(), Axis::Width));
    }

    #[test]
    fn test_static_range_with_lower_bound() {
        let static_range = StaticRange::new("m", "l");
        assert!(!contains(NormalizedRange::new(0, 500), static_range.clone(), Axis::Width));
        assert!(!contains(NormalizedRange::new("s", 0), static_range.clone(), Axis::Width));
        assert!(contains(NormalizedRange::new("m", 0), static_range, Axis::Width));
    }

    #[test]
    fn test_height_never_matches() {
        assert!(!contains(NormalizedRange::new("m", 0), up_to_l(), Axis::Height));
        assert!(!contains(NormalizedRange::new(0, "xl"), up_to_l(), Axis::Height));
    }
}
