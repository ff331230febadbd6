//! Conversions from loosely typed JavaScript arguments.

use bpquery_types::{Axis, RawBound};
use wasm_bindgen::prelude::*;

/// Strings and numbers pass through; anything else (`undefined`, `null`,
/// objects) is the `0` sentinel.
pub fn to_raw_bound(value: &JsValue) -> RawBound {
    if let Some(text) = value.as_string() {
        RawBound::Text(text)
    } else if let Some(number) = value.as_f64() {
        RawBound::Number(number)
    } else {
        RawBound::ZERO
    }
}

/// `"height"` selects the height axis; anything else means width.
pub fn to_axis(property: Option<&str>) -> Axis {
    match property {
        Some("height") => Axis::Height,
        _ => Axis::Width,
    }
}
