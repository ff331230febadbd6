//! Lenient normalization of `(min, max)` call arguments.

use crate::parsers::{parse_pixels, run_parser};
use bpquery_types::{BreakpointRef, NormalizedRange, RawBound};

/// Splits the combined `"min,max"` notation.
///
/// Returns `None` unless the text splits into exactly two parts, in which
/// case callers keep the unsplit value.
pub fn split_pair(text: &str) -> Option<(&str, &str)> {
    let (min, max) = text.split_once(',')?;
    if max.contains(',') {
        return None;
    }
    Some((min, max))
}

/// Converts one raw value into a breakpoint reference.
///
/// Text has all whitespace stripped; digit-only text becomes a pixel
/// count, anything else is kept as a name. Numbers pass through.
pub fn parse_value(raw: RawBound) -> BreakpointRef {
    match raw {
        RawBound::Number(px) => BreakpointRef::Pixels(px),
        RawBound::Text(text) => {
            let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            match run_parser(parse_pixels, &stripped) {
                Ok(px) => BreakpointRef::Pixels(px),
                Err(_) => BreakpointRef::Name(stripped),
            }
        }
    }
}

/// Reduces the accepted call shapes to a canonical `{min, max}` pair.
///
/// - `("xs,s", 0)` splits into `xs` and `s`.
/// - `("100", "300")` and `(100, 300)` both become pixel counts.
/// - A falsy `max` (`0`, `""`, `NaN`) is the unbounded sentinel.
pub fn normalize(min: impl Into<RawBound>, max: impl Into<RawBound>) -> NormalizedRange {
    let min = min.into();
    let mut max = max.into();
    if max.is_falsy() {
        max = RawBound::ZERO;
    }

    let split = match &min {
        RawBound::Text(text) if max.is_zero() => {
            split_pair(text).map(|(lo, hi)| (RawBound::from(lo), RawBound::from(hi)))
        }
        _ => None,
    };
    let (min, max) = split.unwrap_or((min, max));

    NormalizedRange {
        min: parse_value(min),
        max: parse_value(max),
    }
}
