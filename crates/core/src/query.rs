//! Media query construction.

use crate::units::Resolver;
use bpquery_types::{Axis, Bound, NormalizedRange};
use std::fmt;

/// The fixed query for high pixel density screens (ratio 1.5 and up).
pub const HIGH_DENSITY_QUERY: &str = "(-webkit-min-device-pixel-ratio: 1.5), (min--moz-device-pixel-ratio: 1.5), (-o-min-device-pixel-ratio: 3/2), (min-device-pixel-ratio: 1.5)";

/// Pseudo-breakpoint names that select [`HIGH_DENSITY_QUERY`].
pub const HIGH_DENSITY_NAMES: [&str; 2] = ["retina", "hdpi"];

/// A built media query. `Display` renders the CSS text.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaQuery {
    HighDensity,
    Min { axis: Axis, em: f64 },
    Max { axis: Axis, em: f64 },
    Between { axis: Axis, min_em: f64, max_em: f64 },
}

/// Writes a number the way browsers print one: no negative zero, and
/// exponent notation below `1e-6` or from `1e21` up.
struct CssNumber(f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            return f.write_str("0");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        let magnitude = value.abs();
        if magnitude >= 1e21 || magnitude < 1e-6 {
            let text = format!("{:e}", value);
            return match text.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, exponent)
                }
                _ => f.write_str(&text),
            };
        }
        write!(f, "{}", value)
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaQuery::HighDensity => f.write_str(HIGH_DENSITY_QUERY),
            MediaQuery::Min { axis, em } => write!(f, "(min-{}: {}em)", axis, CssNumber(*em)),
            MediaQuery::Max { axis, em } => write!(f, "(max-{}: {}em)", axis, CssNumber(*em)),
            MediaQuery::Between {
                axis,
                min_em,
                max_em,
            } => write!(
                f,
                "(min-{}: {}em) and (max-{}: {}em)",
                axis,
                CssNumber(*min_em),
                axis,
                CssNumber(*max_em)
            ),
        }
    }
}

/// Exact match only: `"Retina"` is an ordinary (unknown) name.
pub fn is_high_density(range: &NormalizedRange) -> bool {
    range
        .min
        .as_name()
        .is_some_and(|name| HIGH_DENSITY_NAMES.contains(&name))
}

/// Picks the query shape for a normalized range.
///
/// The high-density names win regardless of `max` and `axis`. Otherwise an
/// unbounded max gives a min-only query, an unbounded min a max-only query,
/// and anything else a min-and-max range.
pub fn build_query(range: &NormalizedRange, axis: Axis, resolver: &Resolver<'_>) -> MediaQuery {
    if is_high_density(range) {
        MediaQuery::HighDensity
    } else if !range.has_upper() {
        MediaQuery::Min {
            axis,
            em: resolver.resolve(&range.min, Bound::Lower),
        }
    } else if !range.has_lower() {
        MediaQuery::Max {
            axis,
            em: resolver.resolve(&range.max, Bound::Upper),
        }
    } else {
        MediaQuery::Between {
            axis,
            min_em: resolver.resolve(&range.min, Bound::Lower),
            max_em: resolver.resolve(&range.max, Bound::Upper),
        }
    }
}
