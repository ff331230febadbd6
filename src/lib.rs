//! # bpquery
//!
//! Named responsive breakpoints turned into CSS media queries.
//!
//! ```
//! use bpquery::prelude::*;
//!
//! let bp = Breakpoints::new();
//! assert_eq!(bp.get("m", 0), "(min-width: 48em)");
//! assert_eq!(bp.get(0, "m"), "(max-width: 63.9375em)");
//! assert_eq!(bp.get_height(0, 300), "(max-height: 18.75em)");
//! ```
//!
//! The workspace is split the same way the engine is:
//! - [`types`] - breakpoint definitions, range values, axes
//! - [`notation`] - `"min,max"` shorthand and argument normalization
//! - [`traits`] - the media matcher and diagnostics seams
//! - [`engine`] - the breakpoint table, unit conversion, query building and the
//!   [`Breakpoints`] engine
//!
//! Browser bindings live in the separate `bpquery-wasm` crate.

pub use bpquery_core as engine;
pub use bpquery_notation as notation;
pub use bpquery_traits as traits;
pub use bpquery_types as types;

pub use bpquery_core::{
    Breakpoints, ConfigError, HIGH_DENSITY_QUERY, MediaQuery, Options, OptionsUpdate,
    default_breakpoints,
};

pub mod prelude {
    pub use bpquery_core::{
        Axis, Breakpoints, CollectingSink, ConfigError, Diagnostic, DiagnosticSink, LogSink,
        MatchError, MediaMatcher, MediaQuery, Options, OptionsUpdate, StaticRange,
        ViewportMatcher,
    };
}
