//! The pattern host: owner of the shared registry.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use patternkit_protocols::diagnostic::DiagnosticSink;
use patternkit_protocols::editor::{DefaultBlockPolicy, EditorSnapshot};
use patternkit_protocols::error::HostError;
use patternkit_protocols::pattern::PatternProperties;
use patternkit_protocols::registry::PatternRegistryAccess;

use crate::diagnostics::TracingSink;
use crate::lifecycle::{HostState, LifecycleManager, ShutdownSignal};
use crate::picker::{DefaultBlockType, TemplatePicker, VisibilityWatcher, DEFAULT_PICKER_POST_TYPE};
use crate::registry::PatternRegistry;

/// Settings a host is created with.
#[derive(Clone)]
pub struct HostConfig {
    /// Post type the template picker is offered for.
    pub picker_post_type: String,
    pub default_block: Arc<dyn DefaultBlockPolicy>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            picker_post_type: DEFAULT_PICKER_POST_TYPE.to_string(),
            default_block: Arc::new(DefaultBlockType::default()),
            diagnostics: Arc::new(TracingSink),
        }
    }
}

/// Owns the one shared pattern registry and the template picker.
///
/// Create one per process (or per test) and pass it to whatever needs it.
pub struct PatternHost {
    registry: Arc<PatternRegistry>,
    picker: Arc<TemplatePicker>,
    lifecycle: LifecycleManager,
}

impl PatternHost {
    /// Create a running host.
    pub fn create(config: HostConfig) -> Self {
        info!(picker_post_type = %config.picker_post_type, "Pattern host created");
        Self {
            registry: Arc::new(PatternRegistry::with_diagnostics(config.diagnostics)),
            picker: Arc::new(TemplatePicker::new(
                config.picker_post_type,
                config.default_block,
            )),
            lifecycle: LifecycleManager::new(),
        }
    }

    /// The shared registry. Every call returns the same instance.
    pub fn registry(&self) -> Arc<PatternRegistry> {
        self.registry.clone()
    }

    pub fn picker(&self) -> Arc<TemplatePicker> {
        self.picker.clone()
    }

    /// Register a pattern on the shared registry.
    pub fn register_pattern(&self, name: &str, properties: PatternProperties) -> bool {
        self.registry.register_pattern(name, properties)
    }

    /// Unregister a pattern from the shared registry.
    pub fn unregister_pattern(&self, name: &str) -> bool {
        self.registry.unregister_pattern(name)
    }

    /// Spawn a watcher that re-evaluates picker visibility for every snapshot.
    ///
    /// The watcher stops when the host shuts down. On a host that is no
    /// longer running the returned handle is already finished and the
    /// receiver only carries the initial value. Must be called from within
    /// a tokio runtime.
    pub fn watch_visibility(
        &self,
        snapshots: watch::Receiver<EditorSnapshot>,
    ) -> (JoinHandle<()>, watch::Receiver<bool>) {
        // Subscribe before checking state so a concurrent shutdown is seen
        // either here or by the watcher.
        let shutdown = self.lifecycle.shutdown_signal().subscribe();
        let (watcher, visible) = VisibilityWatcher::new(self.picker.clone(), snapshots, shutdown);

        if !self.is_running() {
            debug!(state = ?self.state(), "Host not running, visibility watcher not started");
            drop(watcher);
            return (tokio::spawn(async {}), visible);
        }
        (watcher.spawn(), visible)
    }

    /// Empty the registry, stop watchers and refuse further registration.
    pub fn shutdown(&self) -> Result<(), HostError> {
        self.lifecycle.begin_shutdown()?;
        let dropped = self.registry.close();
        info!(patterns = dropped, "Pattern registry cleared");
        self.lifecycle.finish_shutdown();
        Ok(())
    }

    pub fn state(&self) -> HostState {
        self.lifecycle.state()
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    pub fn shutdown_signal(&self) -> &ShutdownSignal {
        self.lifecycle.shutdown_signal()
    }
}

impl Default for PatternHost {
    fn default() -> Self {
        Self::create(HostConfig::default())
    }
}

impl PatternRegistryAccess for PatternHost {
    fn register_pattern(&self, name: &str, properties: PatternProperties) -> bool {
        PatternHost::register_pattern(self, name, properties)
    }

    fn unregister_pattern(&self, name: &str) -> bool {
        PatternHost::unregister_pattern(self, name)
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
