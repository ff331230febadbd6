//! Low-level nom parser functions for breakpoint notation.

use bpquery_types::{BreakpointRef, NormalizedRange};
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur while parsing strict breakpoint notation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotationError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Empty breakpoint notation")]
    Empty,
}

// --- Helper Parsers ---

fn ws<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.'
}

/// Parses a run of decimal digits as a pixel count.
pub fn parse_pixels(input: &str) -> IResult<&str, f64> {
    map_res(digit1, |digits: &str| digits.parse::<f64>()).parse(input)
}

/// Parses a single token: all digits means pixels, anything else is a name.
pub fn parse_bound(input: &str) -> IResult<&str, BreakpointRef> {
    map(take_while1(is_name_char), |token: &str| {
        match all_consuming(parse_pixels).parse(token) {
            Ok((_, px)) => BreakpointRef::Pixels(px),
            Err(_) => BreakpointRef::Name(token.to_string()),
        }
    })
    .parse(input)
}

/// Parses `min` or `min,max`. A missing max is the unbounded sentinel.
pub fn parse_pair(input: &str) -> IResult<&str, NormalizedRange> {
    map(
        (ws(parse_bound), opt(preceded(char(','), ws(parse_bound)))),
        |(min, max)| NormalizedRange {
            min,
            max: max.unwrap_or(BreakpointRef::UNBOUNDED),
        },
    )
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, NotationError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, NotationError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(NotationError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(NotationError::Parse(e.to_string())),
    }
}

/// Strictly parses breakpoint notation such as `"m"`, `"0,xl"` or `"480, 1024"`.
pub fn parse_range(input: &str) -> Result<NormalizedRange, NotationError> {
    if input.trim().is_empty() {
        return Err(NotationError::Empty);
    }
    run_parser(parse_pair, input)
}
