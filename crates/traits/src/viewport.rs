//! A media query matcher for hosts without a browser.
//!
//! Understands the query shapes the engine emits: comma-separated query
//! lists, `and`-joined features, width/height limits in `em`, `rem` or
//! `px`, and the device-pixel-ratio family including vendor prefixes.

use crate::matcher::{MatchError, MediaMatcher};
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::multi::separated_list1;
use nom::sequence::{delimited, separated_pair};
use nom::{IResult, Parser};

/// Tolerance for comparing em-derived lengths against whole pixels.
const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit {
    Px,
    Em,
    Rem,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FeatureValue {
    Number { value: f64, unit: Option<Unit> },
    Ratio(f64),
}

#[derive(Debug, Clone, PartialEq)]
struct MediaFeature<'a> {
    name: &'a str,
    value: FeatureValue,
}

// --- Helper Parsers ---

fn ws<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(char('-')),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag_no_case("rem"), |_| Unit::Rem),
        map(tag_no_case("em"), |_| Unit::Em),
        map(tag_no_case("px"), |_| Unit::Px),
    ))
    .parse(input)
}

fn parse_feature_value(input: &str) -> IResult<&str, FeatureValue> {
    alt((
        map(separated_pair(parse_number, ws(char('/')), parse_number), |(num, den)| {
            FeatureValue::Ratio(num / den)
        }),
        map((parse_number, opt(parse_unit)), |(value, unit)| {
            FeatureValue::Number { value, unit }
        }),
    ))
    .parse(input)
}

fn parse_feature(input: &str) -> IResult<&str, MediaFeature<'_>> {
    map(
        delimited(
            char('('),
            (
                ws(take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')),
                char(':'),
                ws(parse_feature_value),
            ),
            char(')'),
        ),
        |(name, _, value)| MediaFeature { name, value },
    )
    .parse(input)
}

fn parse_query(input: &str) -> IResult<&str, Vec<MediaFeature<'_>>> {
    separated_list1(tag_no_case("and"), ws(parse_feature)).parse(input)
}

fn parse_query_list(input: &str) -> IResult<&str, Vec<Vec<MediaFeature<'_>>>> {
    separated_list1(char(','), ws(parse_query)).parse(input)
}

/// Matches media queries against a fixed viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMatcher {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
    pub pixel_ratio: f64,
    /// Pixel size of one `em`/`rem` inside media queries.
    pub base_font_size: f64,
}

impl ViewportMatcher {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
            base_font_size: 16.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn with_base_font_size(mut self, base_font_size: f64) -> Self {
        self.base_font_size = base_font_size;
        self
    }

    fn to_px(&self, value: FeatureValue) -> Option<f64> {
        match value {
            FeatureValue::Number {
                value,
                unit: Some(Unit::Em | Unit::Rem),
            } => Some(value * self.base_font_size),
            FeatureValue::Number {
                value,
                unit: Some(Unit::Px),
            } => Some(value),
            FeatureValue::Number { value, unit: None } if value == 0.0 => Some(0.0),
            _ => None,
        }
    }

    fn to_ratio(value: FeatureValue) -> Option<f64> {
        match value {
            FeatureValue::Number { value, unit: None } => Some(value),
            FeatureValue::Ratio(ratio) => Some(ratio),
            FeatureValue::Number { .. } => None,
        }
    }

    fn evaluate(&self, feature: &MediaFeature<'_>, query: &str) -> Result<bool, MatchError> {
        let unsupported = |message: String| MatchError::Unsupported {
            query: query.to_string(),
            message,
        };
        let length = || {
            self.to_px(feature.value)
                .ok_or_else(|| unsupported(format!("'{}' needs a length", feature.name)))
        };
        let ratio = || {
            Self::to_ratio(feature.value)
                .ok_or_else(|| unsupported(format!("'{}' needs a ratio", feature.name)))
        };

        match feature.name.to_ascii_lowercase().as_str() {
            "min-width" => Ok(self.width + EPSILON >= length()?),
            "max-width" => Ok(self.width - EPSILON <= length()?),
            "min-height" => Ok(self.height + EPSILON >= length()?),
            "max-height" => Ok(self.height - EPSILON <= length()?),
            "min-device-pixel-ratio"
            | "-webkit-min-device-pixel-ratio"
            | "min--moz-device-pixel-ratio"
            | "-o-min-device-pixel-ratio" => Ok(self.pixel_ratio + EPSILON >= ratio()?),
            "max-device-pixel-ratio"
            | "-webkit-max-device-pixel-ratio"
            | "max--moz-device-pixel-ratio"
            | "-o-max-device-pixel-ratio" => Ok(self.pixel_ratio - EPSILON <= ratio()?),
            other => Err(unsupported(format!("unknown media feature '{}'", other))),
        }
    }
}

impl Default for ViewportMatcher {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

impl MediaMatcher for ViewportMatcher {
    fn match_media(&self, query: &str) -> Result<bool, MatchError> {
        let (_, queries) = all_consuming(ws(parse_query_list))
            .parse(query)
            .map_err(|e| MatchError::Unsupported {
                query: query.to_string(),
                message: e.to_string(),
            })?;

        // A list matches when any query matches; a query needs every feature.
        for features in &queries {
            let mut all = true;
            for feature in features {
                if !self.evaluate(feature, query)? {
                    all = false;
                    break;
                }
            }
            if all {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn name(&self) -> &'static str {
        "ViewportMatcher"
    }
}
