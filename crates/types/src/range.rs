//! Loose caller input and the canonical ranges it normalizes into.

use crate::breakpoint::BreakpointRef;
use serde::{Deserialize, Serialize};

/// A boundary exactly as a caller supplied it, before normalization.
///
/// Text may be a breakpoint name, a run of digits, or the combined
/// `"min,max"` notation. Numbers are pixel counts.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBound {
    Text(String),
    Number(f64),
}

impl RawBound {
    pub const ZERO: RawBound = RawBound::Number(0.0);

    /// Values that stand for "not supplied": `0`, `NaN` and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            RawBound::Text(text) => text.is_empty(),
            RawBound::Number(n) => *n == 0.0 || n.is_nan(),
        }
    }

    /// The exact numeric zero that triggers the combined-notation split.
    pub fn is_zero(&self) -> bool {
        matches!(self, RawBound::Number(n) if *n == 0.0)
    }
}

impl Default for RawBound {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<&str> for RawBound {
    fn from(text: &str) -> Self {
        RawBound::Text(text.to_string())
    }
}

impl From<String> for RawBound {
    fn from(text: String) -> Self {
        RawBound::Text(text)
    }
}

impl From<i32> for RawBound {
    fn from(px: i32) -> Self {
        RawBound::Number(px as f64)
    }
}

impl From<u32> for RawBound {
    fn from(px: u32) -> Self {
        RawBound::Number(px as f64)
    }
}

impl From<f64> for RawBound {
    fn from(px: f64) -> Self {
        RawBound::Number(px)
    }
}

impl From<BreakpointRef> for RawBound {
    fn from(value: BreakpointRef) -> Self {
        match value {
            BreakpointRef::Name(name) => RawBound::Text(name),
            BreakpointRef::Pixels(px) => RawBound::Number(px),
        }
    }
}

/// A `{min, max}` pair after normalization.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct NormalizedRange {
    pub min: BreakpointRef,
    pub max: BreakpointRef,
}

impl NormalizedRange {
    pub fn new(min: impl Into<BreakpointRef>, max: impl Into<BreakpointRef>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn has_lower(&self) -> bool {
        !self.min.is_unbounded()
    }

    pub fn has_upper(&self) -> bool {
        !self.max.is_unbounded()
    }
}

/// The single viewport range assumed when live matching is switched off.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StaticRange {
    pub min: BreakpointRef,
    pub max: BreakpointRef,
}

impl StaticRange {
    pub fn new(min: impl Into<BreakpointRef>, max: impl Into<BreakpointRef>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

impl From<NormalizedRange> for StaticRange {
    fn from(range: NormalizedRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}
