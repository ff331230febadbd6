//! Live media query matching through `window.matchMedia`.

use bpquery_traits::{MatchError, MediaMatcher};

/// Asks the browser whether a query matches right now.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowMatcher;

impl MediaMatcher for WindowMatcher {
    fn match_media(&self, query: &str) -> Result<bool, MatchError> {
        let window = web_sys::window()
            .ok_or_else(|| MatchError::Unavailable("No window object available".to_string()))?;
        let list = window
            .match_media(query)
            .map_err(|e| MatchError::Unavailable(format!("matchMedia failed: {:?}", e)))?
            .ok_or_else(|| MatchError::Unavailable("matchMedia returned null".to_string()))?;
        Ok(list.matches())
    }

    fn name(&self) -> &'static str {
        "WindowMatcher"
    }
}
