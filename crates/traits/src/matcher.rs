//! MediaMatcher trait for abstracting live media query evaluation.
//!
//! The engine builds query strings itself but never evaluates them. Hosts
//! plug in whatever can answer "does this query match right now": the
//! browser's `matchMedia`, a fixed viewport, or nothing at all.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for media query matching.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Media query matching is not available: {0}")]
    Unavailable(String),

    #[error("Unsupported media query '{query}': {message}")]
    Unsupported { query: String, message: String },
}

/// A trait for evaluating media query strings against the current environment.
///
/// # Implementations
///
/// - `UnavailableMatcher`: Always reports that matching is unavailable (default)
/// - `ViewportMatcher`: Evaluates queries against a fixed viewport
/// - `WindowMatcher` (wasm crate): Delegates to `window.matchMedia`
pub trait MediaMatcher: Send + Sync + Debug {
    /// Evaluate a media query string.
    ///
    /// # Returns
    ///
    /// Whether the query currently matches, or an error if this host cannot
    /// answer the question.
    fn match_media(&self, query: &str) -> Result<bool, MatchError>;

    /// Returns a human-readable name for this matcher (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// The matcher used when the host has no media query support.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableMatcher;

impl MediaMatcher for UnavailableMatcher {
    fn match_media(&self, _query: &str) -> Result<bool, MatchError> {
        Err(MatchError::Unavailable(
            "this host has no media query matcher".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "UnavailableMatcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_matcher_always_errors() {
        let matcher = UnavailableMatcher;
        let result = matcher.match_media("(min-width: 64em)");
        assert!(matches!(result, Err(MatchError::Unavailable(_))));
        assert_eq!(matcher.name(), "UnavailableMatcher");
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::Unsupported {
            query: "(orientation: portrait)".to_string(),
            message: "unknown feature".to_string(),
        };
        assert!(err.to_string().contains("orientation"));
        assert!(err.to_string().contains("unknown feature"));
    }
}
