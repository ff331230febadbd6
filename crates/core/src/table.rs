//! The derived lookup table of breakpoint boundaries.

use bpquery_types::{Bound, BreakpointDefinition};
use std::collections::HashMap;

/// Names are compared in lowercase.
pub fn canonical_name(name: &str) -> String {
    name.to_lowercase()
}

/// Inclusive min/max pixel boundaries for every named breakpoint.
///
/// Built by sorting the definitions by pixel value. Each breakpoint's max is
/// one pixel below the next breakpoint's min, so ranges never overlap; the
/// largest breakpoint has no max.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointTable {
    sorted: Vec<(String, i64)>,
    min: HashMap<String, i64>,
    max: HashMap<String, i64>,
}

impl BreakpointTable {
    pub fn derive(breakpoints: &[BreakpointDefinition]) -> Self {
        let mut sorted: Vec<(String, i64)> = breakpoints
            .iter()
            .map(|bp| (canonical_name(&bp.name), i64::from(bp.px)))
            .collect();
        // Stable, so equal pixel values keep their input order.
        sorted.sort_by_key(|(_, px)| *px);

        let mut min = HashMap::with_capacity(sorted.len());
        let mut max = HashMap::with_capacity(sorted.len());
        for (i, (name, px)) in sorted.iter().enumerate() {
            min.insert(name.clone(), *px);
            if let Some((_, next_px)) = sorted.get(i + 1) {
                max.insert(name.clone(), next_px - 1);
            }
        }

        log::debug!("Derived breakpoint table with {} entries", sorted.len());
        Self { sorted, min, max }
    }

    /// The breakpoint's own pixel value.
    pub fn min_px(&self, name: &str) -> Option<i64> {
        self.min.get(&canonical_name(name)).copied()
    }

    /// One pixel below the next breakpoint; `None` for the largest.
    pub fn max_px(&self, name: &str) -> Option<i64> {
        self.max.get(&canonical_name(name)).copied()
    }

    pub fn lookup(&self, name: &str, bound: Bound) -> Option<i64> {
        match bound {
            Bound::Lower => self.min_px(name),
            Bound::Upper => self.max_px(name),
        }
    }

    /// `(name, min, max)` for each definition in ascending order.
    pub fn ranges(&self) -> Vec<(&str, i64, Option<i64>)> {
        self.sorted
            .iter()
            .enumerate()
            .map(|(i, (name, px))| {
                let max = self.sorted.get(i + 1).map(|(_, next)| next - 1);
                (name.as_str(), *px, max)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}
