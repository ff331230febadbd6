//! # bpquery-core
//!
//! Platform-agnostic breakpoint engine:
//! - **options**: configuration and partial updates
//! - **table**: sorted breakpoint table with non-overlapping boundaries
//! - **units**: pixel to `em` conversion and name resolution
//! - **query**: media query construction
//! - **evaluate**: static-mode matching
//! - **engine**: [`Breakpoints`], tying the pieces together
//!
//! ## Design Principle
//!
//! This crate never evaluates a media query itself. Live matching goes
//! through the [`MediaMatcher`] trait, and every soft failure goes through
//! a [`DiagnosticSink`], so hosts decide both.

// Re-export foundation crates
pub use bpquery_notation as notation;
pub use bpquery_traits as traits;
pub use bpquery_types as types;

pub mod engine;
pub mod error;
pub mod evaluate;
pub mod options;
pub mod query;
pub mod table;
pub mod units;

pub use engine::Breakpoints;
pub use error::ConfigError;
pub use options::{Options, OptionsUpdate, default_breakpoints};
pub use query::{HIGH_DENSITY_QUERY, MediaQuery};
pub use table::BreakpointTable;
pub use units::{Resolver, UnitConverter};

// Re-export commonly used types from foundation crates
pub use traits::{
    CollectingSink, Diagnostic, DiagnosticSink, LogSink, MatchError, MediaMatcher,
    UnavailableMatcher, ViewportMatcher,
};
pub use types::{Axis, Bound, BreakpointDefinition, BreakpointRef, NormalizedRange, RawBound, StaticRange};
