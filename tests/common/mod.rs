use bpquery::prelude::*;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Engine with default options whose diagnostics land in the returned sink.
pub fn engine() -> (Breakpoints, Arc<CollectingSink>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let sink = Arc::new(CollectingSink::new());
    let bp = Breakpoints::new().with_diagnostics(Arc::clone(&sink));
    (bp, sink)
}

/// Engine that answers live queries as a browser of the given size would.
pub fn engine_with_viewport(width: f64, height: f64) -> (Breakpoints, Arc<CollectingSink>) {
    let (bp, sink) = engine();
    (bp.with_matcher(ViewportMatcher::new(width, height)), sink)
}
