//! Registry of block patterns.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use patternkit_protocols::diagnostic::{Diagnostic, DiagnosticSink};
use patternkit_protocols::error::RegistryError;
use patternkit_protocols::pattern::{Pattern, PatternProperties, NAME_KEY};
use patternkit_protocols::registry::PatternRegistryAccess;

use super::base::{BaseRegistry, Registerable, Sealed};
use crate::diagnostics::TracingSink;

impl Registerable for Pattern {
    fn registry_id(&self) -> &str {
        self.name()
    }
}

/// Registry for block patterns.
///
/// Re-registering a name replaces the previous record wholesale. Misuse
/// (bad names, unknown names on unregister) is returned as an error and
/// also reported to the diagnostic sink; it never panics.
pub struct PatternRegistry {
    inner: BaseRegistry<Pattern>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl PatternRegistry {
    /// Create a registry reporting diagnostics through `tracing`.
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingSink))
    }

    /// Create a registry with a custom diagnostic sink.
    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            inner: BaseRegistry::new(),
            diagnostics,
        }
    }

    /// Register a pattern.
    ///
    /// The stored properties get a `name` entry equal to `name`, overwriting
    /// any the caller supplied.
    pub fn register(&self, name: &str, properties: PatternProperties) -> Result<(), RegistryError> {
        const FUNCTION: &str = "PatternRegistry::register";

        if self.is_closed() {
            return self.fail(FUNCTION, RegistryError::HostStopped);
        }
        if name.is_empty() {
            return self.fail(FUNCTION, RegistryError::InvalidName("\"\"".to_string()));
        }

        let pattern = Arc::new(Pattern::new(name, properties));
        match self.inner.insert(pattern) {
            Ok(Some(_)) => debug!(pattern = name, "Replaced pattern"),
            Ok(None) => debug!(pattern = name, "Registered pattern"),
            // Closed between the check above and the insert.
            Err(Sealed) => return self.fail(FUNCTION, RegistryError::HostStopped),
        }
        Ok(())
    }

    /// Register a pattern from an untyped definition carrying its own `name`.
    pub fn register_value(&self, definition: &Value) -> Result<(), RegistryError> {
        const FUNCTION: &str = "PatternRegistry::register_value";

        let Value::Object(properties) = definition else {
            return self.fail(
                FUNCTION,
                RegistryError::InvalidDefinition(format!("got {}", json_kind(definition))),
            );
        };

        match properties.get(NAME_KEY) {
            Some(Value::String(name)) if !name.is_empty() => {
                self.register(name, properties.clone())
            }
            Some(other) => self.fail(FUNCTION, RegistryError::InvalidName(other.to_string())),
            None => self.fail(FUNCTION, RegistryError::InvalidName("missing".to_string())),
        }
    }

    /// Unregister a pattern.
    pub fn unregister(&self, name: &str) -> Result<(), RegistryError> {
        if self.inner.remove(name).is_none() {
            return self.fail(
                "PatternRegistry::unregister",
                RegistryError::NotFound(name.to_string()),
            );
        }

        debug!(pattern = name, "Unregistered pattern");
        Ok(())
    }

    /// Get a registered pattern. Absence is not an error.
    pub fn get(&self, name: &str) -> Option<Arc<Pattern>> {
        self.inner.get(name)
    }

    /// All registered patterns in registration order.
    pub fn get_all(&self) -> Vec<Arc<Pattern>> {
        self.inner.snapshot()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.inner.list_ids()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop every pattern and refuse further registration.
    pub(crate) fn close(&self) -> usize {
        self.inner.seal()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_sealed()
    }

    fn fail(&self, function: &'static str, error: RegistryError) -> Result<(), RegistryError> {
        self.diagnostics
            .report(&Diagnostic::new(function, error.to_string()));
        Err(error)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRegistryAccess for PatternRegistry {
    fn register_pattern(&self, name: &str, properties: PatternProperties) -> bool {
        self.register(name, properties).is_ok()
    }

    fn unregister_pattern(&self, name: &str) -> bool {
        self.unregister(name).is_ok()
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
