pub mod diagnostics;
pub mod matcher;
pub mod viewport;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink};
pub use matcher::{MatchError, MediaMatcher, UnavailableMatcher};
pub use viewport::ViewportMatcher;
