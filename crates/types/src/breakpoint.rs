//! Breakpoint definitions and references to them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named pixel threshold, e.g. `{ "name": "l", "px": 1024 }`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreakpointDefinition {
    pub name: String,
    pub px: u32,
}

impl BreakpointDefinition {
    pub fn new(name: impl Into<String>, px: u32) -> Self {
        Self {
            name: name.into(),
            px,
        }
    }
}

/// One side of a breakpoint range: either a breakpoint name or a raw pixel count.
///
/// `Pixels(0.0)` is the "no bound on this side" sentinel, so zero is never a
/// usable pixel boundary in a range slot.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BreakpointRef {
    Pixels(f64),
    Name(String),
}

impl BreakpointRef {
    pub const UNBOUNDED: BreakpointRef = BreakpointRef::Pixels(0.0);

    pub fn name(name: impl Into<String>) -> Self {
        BreakpointRef::Name(name.into())
    }

    /// True for the numeric zero sentinel. A name is never unbounded.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, BreakpointRef::Pixels(px) if *px == 0.0)
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            BreakpointRef::Name(name) => Some(name),
            BreakpointRef::Pixels(_) => None,
        }
    }
}

impl Default for BreakpointRef {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl From<&str> for BreakpointRef {
    fn from(name: &str) -> Self {
        BreakpointRef::Name(name.to_string())
    }
}

impl From<String> for BreakpointRef {
    fn from(name: String) -> Self {
        BreakpointRef::Name(name)
    }
}

impl From<u32> for BreakpointRef {
    fn from(px: u32) -> Self {
        BreakpointRef::Pixels(px as f64)
    }
}

impl From<i32> for BreakpointRef {
    fn from(px: i32) -> Self {
        BreakpointRef::Pixels(px as f64)
    }
}

impl From<f64> for BreakpointRef {
    fn from(px: f64) -> Self {
        BreakpointRef::Pixels(px)
    }
}

impl fmt::Display for BreakpointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakpointRef::Name(name) => write!(f, "{}", name),
            BreakpointRef::Pixels(px) => write!(f, "{}", px),
        }
    }
}

/// Which end of a breakpoint's range is wanted when resolving a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The breakpoint's own pixel value.
    Lower,
    /// One pixel below the next breakpoint.
    Upper,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Lower => f.write_str("min"),
            Bound::Upper => f.write_str("max"),
        }
    }
}
