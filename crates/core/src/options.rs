//! Engine configuration and partial updates.

use crate::error::ConfigError;
use bpquery_notation::parse_range;
use bpquery_types::{BreakpointDefinition, BreakpointRef, StaticRange};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

fn default_base_font_size() -> f64 {
    16.0
}

/// The stock breakpoint table, smallest to largest.
pub fn default_breakpoints() -> Vec<BreakpointDefinition> {
    [
        ("xxs", 359),
        ("xs", 480),
        ("s", 640),
        ("m", 768),
        ("l", 1024),
        ("xl", 1244),
        ("xxl", 1410),
        ("xxxl", 1570),
        ("fhd", 1900),
    ]
    .into_iter()
    .map(|(name, px)| BreakpointDefinition::new(name, px))
    .collect()
}

fn default_static_range() -> StaticRange {
    StaticRange::new(0, "xl")
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// `false` switches matching to the static range instead of live queries.
    #[serde(default = "default_true")]
    pub is_responsive: bool,
    /// Pixel size of one `em`.
    #[serde(default = "default_base_font_size")]
    pub base_font_size: f64,
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<BreakpointDefinition>,
    /// The viewport assumed when `is_responsive` is `false`.
    #[serde(default = "default_static_range")]
    pub static_range: StaticRange,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            is_responsive: default_true(),
            base_font_size: default_base_font_size(),
            breakpoints: default_breakpoints(),
            static_range: default_static_range(),
        }
    }
}

impl Options {
    /// Merges an update. Returns `true` when the breakpoint list changed and
    /// the table has to be derived again.
    pub fn apply(&mut self, update: OptionsUpdate) -> bool {
        if let Some(is_responsive) = update.is_responsive {
            self.is_responsive = is_responsive;
        }
        if let Some(base_font_size) = update.base_font_size.filter(|size| is_valid_font_size(*size)) {
            self.base_font_size = base_font_size;
        }
        if let Some(static_range) = update.static_range {
            self.static_range = static_range;
        }
        match update.breakpoints {
            Some(breakpoints) if !breakpoints.is_empty() => {
                self.breakpoints = breakpoints;
                true
            }
            _ => false,
        }
    }
}

fn is_valid_font_size(size: f64) -> bool {
    size.is_finite() && size > 0.0
}

/// A partial configuration change. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsUpdate {
    pub is_responsive: Option<bool>,
    pub base_font_size: Option<f64>,
    /// An empty list counts as not supplied.
    pub breakpoints: Option<Vec<BreakpointDefinition>>,
    pub static_range: Option<StaticRange>,
}

impl OptionsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responsive(mut self, is_responsive: bool) -> Self {
        self.is_responsive = Some(is_responsive);
        self
    }

    pub fn base_font_size(mut self, base_font_size: f64) -> Self {
        self.base_font_size = Some(base_font_size);
        self
    }

    pub fn breakpoints(mut self, breakpoints: Vec<BreakpointDefinition>) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    pub fn static_range(mut self, static_range: StaticRange) -> Self {
        self.static_range = Some(static_range);
        self
    }

    /// Decodes a loosely typed options object such as
    /// `{"baseFontSize": 14, "breakpoints": [{"name": "s", "px": 400}]}`.
    ///
    /// Unknown keys and keys holding the wrong type are ignored. A supplied
    /// breakpoint list must be valid in full, otherwise the whole update is
    /// rejected.
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut update = OptionsUpdate::default();
        let Some(object) = value.as_object() else {
            return Ok(update);
        };

        update.is_responsive = object.get("isResponsive").and_then(Value::as_bool);
        update.base_font_size = object
            .get("baseFontSize")
            .and_then(Value::as_f64)
            .filter(|size| is_valid_font_size(*size));

        if let Some(entries) = object.get("breakpoints").and_then(Value::as_array) {
            if !entries.is_empty() {
                let breakpoints = entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| parse_breakpoint(index, entry))
                    .collect::<Result<Vec<_>, _>>()?;
                update.breakpoints = Some(breakpoints);
            }
        }

        update.static_range = object.get("staticRange").and_then(parse_static_range);
        Ok(update)
    }
}

fn parse_breakpoint(index: usize, entry: &Value) -> Result<BreakpointDefinition, ConfigError> {
    let object = entry.as_object().ok_or(ConfigError::NotAnObject { index })?;
    let name = object
        .get("name")
        .ok_or(ConfigError::MissingField { index, field: "name" })?;
    let px = object
        .get("px")
        .ok_or(ConfigError::MissingField { index, field: "px" })?;

    let name = match name {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    };
    let px = parse_px(px).unwrap_or_else(|| {
        log::debug!("Breakpoint '{}' has no usable px value ({}), using 0", name, px);
        0
    });

    Ok(BreakpointDefinition { name, px })
}

/// Integer pixels from a number (truncated) or the leading digits of a string.
fn parse_px(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => {
            if let Some(px) = number.as_u64() {
                return Some(u32::try_from(px).unwrap_or(u32::MAX));
            }
            let px = number.as_f64()?.trunc();
            (px >= 0.0).then(|| px.min(f64::from(u32::MAX)) as u32)
        }
        Value::String(text) => {
            let text = text.trim_start();
            let digits = text
                .find(|c: char| !c.is_ascii_digit())
                .map_or(text, |end| &text[..end]);
            digits.parse::<u32>().ok()
        }
        _ => None,
    }
}

fn parse_static_range(value: &Value) -> Option<StaticRange> {
    match value {
        Value::String(notation) => match parse_range(notation) {
            Ok(range) => Some(range.into()),
            Err(e) => {
                log::debug!("Ignoring static range '{}': {}", notation, e);
                None
            }
        },
        Value::Object(object) => {
            let side = |key: &str| {
                object
                    .get(key)
                    .and_then(|v| serde_json::from_value::<BreakpointRef>(v.clone()).ok())
            };
            Some(StaticRange {
                min: side("min")?,
                max: side("max")?,
            })
        }
        _ => None,
    }
}
