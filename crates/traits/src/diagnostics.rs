//! Advisory diagnostics raised while degrading gracefully.
//!
//! None of these interrupt the caller: an unknown breakpoint resolves to
//! zero, a missing matcher answers `false`, and a rejected update leaves the
//! configuration untouched. The sink decides where the message goes.

use bpquery_types::Bound;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// A soft failure that was recovered from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error("Breakpoint '{name}' doesn't exist as a {bound} boundary - replacing with 0")]
    UnknownBreakpoint { name: String, bound: Bound },

    #[error("Media query matching is not supported here, answering false ({reason})")]
    MatcherUnavailable { reason: String },

    #[error("Invalid breakpoints rejected, use the format {{name: 'string', px: number}} ({reason})")]
    InvalidBreakpoints { reason: String },
}

/// Receives diagnostics from the engine.
pub trait DiagnosticSink: Send + Sync + Debug {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards every diagnostic to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::warn!(target: "bpquery", "{}", diagnostic);
    }
}

/// Keeps every diagnostic in memory so hosts can surface them later.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RwLock<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything reported so far.
    ///
    /// Returns an empty list if the lock is poisoned.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .read()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    /// Removes and returns everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .write()
            .map(|mut d| std::mem::take(&mut *d))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.read().map(|d| d.is_empty()).unwrap_or(true)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::debug!(target: "bpquery", "collected diagnostic: {}", diagnostic);
        if let Ok(mut diagnostics) = self.diagnostics.write() {
            diagnostics.push(diagnostic.clone());
        }
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_collecting_sink_records_in_order() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.report(&Diagnostic::UnknownBreakpoint {
            name: "huge".to_string(),
            bound: Bound::Lower,
        });
        sink.report(&Diagnostic::MatcherUnavailable {
            reason: "no window".to_string(),
        });

        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(diagnostics[0], Diagnostic::UnknownBreakpoint { .. }));
        assert!(matches!(diagnostics[1], Diagnostic::MatcherUnavailable { .. }));
    }

    #[test]
    fn test_collecting_sink_take_drains() {
        let sink = CollectingSink::new();
        sink.report(&Diagnostic::InvalidBreakpoints {
            reason: "entry 0 has no px".to_string(),
        });

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_shared_sink_reports_through_arc() {
        let sink = Arc::new(CollectingSink::new());
        let shared: Arc<CollectingSink> = Arc::clone(&sink);
        shared.report(&Diagnostic::MatcherUnavailable {
            reason: "test".to_string(),
        });
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::UnknownBreakpoint {
            name: "nonexistent".to_string(),
            bound: Bound::Upper,
        };
        let message = diagnostic.to_string();
        assert!(message.contains("'nonexistent'"));
        assert!(message.contains("max"));
        assert!(message.contains("replacing with 0"));

        let diagnostic = Diagnostic::InvalidBreakpoints {
            reason: "entry 2 is missing 'px'".to_string(),
        };
        assert!(diagnostic.to_string().contains("{name: 'string', px: number}"));
    }
}
