//! Registration surface exposed to pattern contributors.

use crate::pattern::PatternProperties;

/// Registration access handed to independent contributors.
///
/// Failures are reported as `false` (plus a diagnostic) rather than an error
/// so a naming mistake in one contributor never aborts the host.
pub trait PatternRegistryAccess: Send + Sync {
    /// Register a pattern under `name`, replacing any previous record.
    fn register_pattern(&self, name: &str, properties: PatternProperties) -> bool;

    /// Remove the pattern registered under `name`.
    fn unregister_pattern(&self, name: &str) -> bool;
}
