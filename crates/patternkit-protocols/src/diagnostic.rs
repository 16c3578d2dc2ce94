//! Developer-facing diagnostics for registry misuse.

use std::fmt;

/// A misuse report: which call went wrong and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Fully qualified name of the offending call, e.g. `PatternRegistry::register`.
    pub function: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(function: &'static str, message: impl Into<String>) -> Self {
        Self {
            function,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was called incorrectly. {}", self.function, self.message)
    }
}

/// Receives diagnostics. Reporting is advisory and must never fail.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}
