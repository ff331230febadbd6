//! Pixel to `em` conversion and boundary resolution.

use crate::table::BreakpointTable;
use bpquery_traits::{Diagnostic, DiagnosticSink};
use bpquery_types::{Bound, BreakpointRef};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    base_font_size: f64,
}

impl UnitConverter {
    pub fn new(base_font_size: f64) -> Self {
        Self { base_font_size }
    }

    pub fn px_to_em(&self, px: f64) -> f64 {
        px / self.base_font_size
    }
}

/// Resolves breakpoint references to `em` against one table snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a BreakpointTable,
    units: UnitConverter,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> Resolver<'a> {
    pub fn new(
        table: &'a BreakpointTable,
        units: UnitConverter,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            table,
            units,
            diagnostics,
        }
    }

    /// Pixel counts convert directly. Names are looked up in the min or max
    /// table; an unknown name is reported and resolves to `0`.
    pub fn resolve(&self, boundary: &BreakpointRef, bound: Bound) -> f64 {
        match boundary {
            BreakpointRef::Pixels(px) => self.units.px_to_em(*px),
            BreakpointRef::Name(name) => match self.table.lookup(name, bound) {
                Some(px) => self.units.px_to_em(px as f64),
                None => {
                    self.diagnostics.report(&Diagnostic::UnknownBreakpoint {
                        name: name.clone(),
                        bound,
                    });
                    0.0
                }
            },
        }
    }
}
