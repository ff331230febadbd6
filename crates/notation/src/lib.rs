//! Parsing for the loose breakpoint notations callers pass in.
//!
//! - [`normalize`] is the lenient path used by every query: it never fails
//!   and reduces a `(min, max)` call to a [`NormalizedRange`].
//! - [`parse_range`] is the strict path for configuration values such as a
//!   static range written as `"0,xl"`.
//!
//! [`NormalizedRange`]: bpquery_types::NormalizedRange

pub mod normalize;
pub mod parsers;

pub use normalize::{normalize, parse_value, split_pair};
pub use parsers::{NotationError, parse_range};
