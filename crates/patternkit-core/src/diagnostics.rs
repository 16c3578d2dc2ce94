//! Diagnostic sinks.

use parking_lot::Mutex;
use tracing::warn;

use patternkit_protocols::diagnostic::{Diagnostic, DiagnosticSink};

/// Tracing target used for misuse diagnostics.
pub const DIAGNOSTIC_TARGET: &str = "patternkit::doing_it_wrong";

/// Default sink: emits each diagnostic as a `warn` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        warn!(
            target: DIAGNOSTIC_TARGET,
            function = diagnostic.function,
            "{}",
            diagnostic.message
        );
    }
}

/// Keeps diagnostics in memory so a host can inspect them later.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far, oldest first.
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Drain the collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.reports.lock())
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports.lock().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.report(&Diagnostic::new("a", "first"));
        sink.report(&Diagnostic::new("b", "second"));

        let reports = sink.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].message, "first");
        assert_eq!(reports[1].function, "b");
    }

    #[test]
    fn test_memory_sink_take_drains() {
        let sink = MemorySink::new();
        sink.report(&Diagnostic::new("a", "first"));

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.report(&Diagnostic::new("PatternRegistry::register", "bad name"));
    }
}
