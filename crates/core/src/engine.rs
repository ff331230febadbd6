//! The breakpoint engine: one configuration, one derived table, one matcher.

use crate::error::ConfigError;
use crate::evaluate::static_containment;
use crate::options::{Options, OptionsUpdate};
use crate::query::{MediaQuery, build_query};
use crate::table::BreakpointTable;
use crate::units::{Resolver, UnitConverter};
use bpquery_notation::normalize;
use bpquery_traits::{Diagnostic, DiagnosticSink, LogSink, MediaMatcher, UnavailableMatcher};
use bpquery_types::{Axis, RawBound};
use serde_json::Value;

/// Builds media queries from named breakpoints and answers whether they match.
///
/// # Example
///
/// ```
/// use bpquery_core::Breakpoints;
///
/// let bp = Breakpoints::new();
/// assert_eq!(bp.get("l", 0), "(min-width: 64em)");
/// assert_eq!(bp.get("s,m", 0), "(min-width: 40em) and (max-width: 63.9375em)");
/// ```
#[derive(Debug)]
pub struct Breakpoints {
    options: Options,
    table: BreakpointTable,
    matcher: Box<dyn MediaMatcher>,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new()
    }
}

impl Breakpoints {
    /// An engine with the default options, no live matcher, and diagnostics
    /// sent to the `log` facade.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        let table = BreakpointTable::derive(&options.breakpoints);
        Self {
            options,
            table,
            matcher: Box::new(UnavailableMatcher),
            diagnostics: Box::new(LogSink),
        }
    }

    pub fn with_matcher(mut self, matcher: impl MediaMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    pub fn matcher(&self) -> &dyn MediaMatcher {
        self.matcher.as_ref()
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(
            &self.table,
            UnitConverter::new(self.options.base_font_size),
            self.diagnostics.as_ref(),
        )
    }

    /// Builds the typed query for any call shape `get` accepts.
    pub fn query(
        &self,
        min: impl Into<RawBound>,
        max: impl Into<RawBound>,
        axis: Axis,
    ) -> MediaQuery {
        let range = normalize(min, max);
        build_query(&range, axis, &self.resolver())
    }

    /// Media query text for `min`/`max` on the given axis.
    pub fn get_for(&self, min: impl Into<RawBound>, max: impl Into<RawBound>, axis: Axis) -> String {
        self.query(min, max, axis).to_string()
    }

    /// Width media query text. `max` of `0` means no upper bound.
    ///
    /// `min` also accepts the combined `"min,max"` notation and the
    /// `"retina"`/`"hdpi"` pseudo-breakpoints.
    pub fn get(&self, min: impl Into<RawBound>, max: impl Into<RawBound>) -> String {
        self.get_for(min, max, Axis::Width)
    }

    pub fn get_height(&self, min: impl Into<RawBound>, max: impl Into<RawBound>) -> String {
        self.get_for(min, max, Axis::Height)
    }

    /// Whether the environment currently satisfies the query.
    ///
    /// Non-responsive engines check the static range instead. A matcher that
    /// cannot answer is reported and counts as `false`.
    pub fn is_for(&self, min: impl Into<RawBound>, max: impl Into<RawBound>, axis: Axis) -> bool {
        let range = normalize(min, max);
        let resolver = self.resolver();

        if !self.options.is_responsive {
            return static_containment(&range, axis, &self.options.static_range, &resolver);
        }

        let query = build_query(&range, axis, &resolver).to_string();
        match self.matcher.match_media(&query) {
            Ok(matches) => matches,
            Err(e) => {
                self.diagnostics.report(&Diagnostic::MatcherUnavailable {
                    reason: e.to_string(),
                });
                false
            }
        }
    }

    pub fn is(&self, min: impl Into<RawBound>, max: impl Into<RawBound>) -> bool {
        self.is_for(min, max, Axis::Width)
    }

    pub fn is_height(&self, min: impl Into<RawBound>, max: impl Into<RawBound>) -> bool {
        self.is_for(min, max, Axis::Height)
    }

    /// Applies a typed update and re-derives the table if the breakpoints
    /// changed. Typed breakpoints are always complete, so this returns `true`.
    pub fn set_options(&mut self, update: OptionsUpdate) -> bool {
        if self.options.apply(update) {
            self.table = BreakpointTable::derive(&self.options.breakpoints);
        }
        true
    }

    /// Applies a loosely typed options object, or leaves everything as it was.
    pub fn try_set_options_json(&mut self, value: &Value) -> Result<(), ConfigError> {
        let update = OptionsUpdate::from_json(value)?;
        self.set_options(update);
        Ok(())
    }

    /// Like [`Self::try_set_options_json`], reporting a rejection as a
    /// diagnostic and returning `false`.
    pub fn set_options_json(&mut self, value: &Value) -> bool {
        match self.try_set_options_json(value) {
            Ok(()) => true,
            Err(e) => {
                self.diagnostics.report(&Diagnostic::InvalidBreakpoints {
                    reason: e.to_string(),
                });
                false
            }
        }
    }
}
