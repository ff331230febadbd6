//! WebAssembly bindings for bpquery.
//!
//! Exposes the breakpoint engine to JavaScript with the familiar call
//! shapes:
//!
//! ```javascript
//! import init, { get, getHeight, is, isHeight, options } from '@bpquery/wasm';
//!
//! await init();
//!
//! get('l');             // "(min-width: 64em)"
//! get(0, 'l');          // "(max-width: 77.6875em)"
//! get('s,m');           // "(min-width: 40em) and (max-width: 63.9375em)"
//! getHeight(0, 300);    // "(max-height: 18.75em)"
//! is('m');              // window.matchMedia(get('m')).matches
//!
//! options({
//!   breakpoints: [
//!     { name: 'small', px: 400 },
//!     { name: 'medium', px: 800 },
//!     { name: 'large', px: 1200 }
//!   ]
//! });
//! ```
//!
//! # Module Structure
//!
//! - [`matcher`] - `WindowMatcher`, backed by `window.matchMedia`
//! - [`types`] - conversions from JavaScript argument values
//!
//! The engine lives in a thread-local: a browser page runs these calls on
//! one thread, and every export shares the same configuration.

mod matcher;
mod types;

pub use matcher::WindowMatcher;

use bpquery_core::Breakpoints;
use std::cell::RefCell;
use types::{to_axis, to_raw_bound};
use wasm_bindgen::prelude::*;

thread_local! {
    static ENGINE: RefCell<Breakpoints> =
        RefCell::new(Breakpoints::new().with_matcher(WindowMatcher));
}

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the bpquery-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Media query text for a breakpoint name, pixel count, or `"min,max"` string.
#[wasm_bindgen]
pub fn get(min: JsValue, max: JsValue, property: Option<String>) -> String {
    let axis = to_axis(property.as_deref());
    ENGINE.with(|engine| {
        engine
            .borrow()
            .get_for(to_raw_bound(&min), to_raw_bound(&max), axis)
    })
}

/// Shortcut for `get` with a height based query.
#[wasm_bindgen(js_name = getHeight)]
pub fn get_height(min: JsValue, max: JsValue) -> String {
    ENGINE.with(|engine| {
        engine
            .borrow()
            .get_height(to_raw_bound(&min), to_raw_bound(&max))
    })
}

/// Whether the page currently matches the query `get` would build.
#[wasm_bindgen]
pub fn is(min: JsValue, max: JsValue, property: Option<String>) -> bool {
    let axis = to_axis(property.as_deref());
    ENGINE.with(|engine| {
        engine
            .borrow()
            .is_for(to_raw_bound(&min), to_raw_bound(&max), axis)
    })
}

/// Shortcut for `is` with a height based query.
#[wasm_bindgen(js_name = isHeight)]
pub fn is_height(min: JsValue, max: JsValue) -> bool {
    ENGINE.with(|engine| {
        engine
            .borrow()
            .is_height(to_raw_bound(&min), to_raw_bound(&max))
    })
}

/// Update `isResponsive`, `baseFontSize`, `breakpoints` or `staticRange`.
///
/// Returns `false`, leaving the options untouched, if a breakpoint entry is
/// missing its `name` or `px`.
#[wasm_bindgen]
pub fn options(opts: JsValue) -> bool {
    let value: serde_json::Value = match serde_wasm_bindgen::from_value(opts) {
        Ok(value) => value,
        Err(e) => {
            log::warn!(target: "bpquery", "Options must be a plain object: {}", e);
            return false;
        }
    };
    ENGINE.with(|engine| engine.borrow_mut().set_options_json(&value))
}

/// The current options as a plain object.
#[wasm_bindgen(js_name = getOptions)]
pub fn get_options() -> Result<JsValue, JsValue> {
    ENGINE.with(|engine| {
        let engine = engine.borrow();
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        serde::Serialize::serialize(engine.options(), &serializer)
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    })
}
