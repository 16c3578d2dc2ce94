//! Host lifecycle management.

use std::sync::atomic::{AtomicU8, Ordering};

use tokio::sync::broadcast;
use tracing::info;

use patternkit_protocols::error::HostError;

/// Host state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HostState {
    /// Serving registrations and lookups.
    Running = 0,
    /// Shutting down.
    ShuttingDown = 1,
    /// Stopped; the registry has been emptied.
    Stopped = 2,
}

impl From<u8> for HostState {
    fn from(v: u8) -> Self {
        match v {
            0 => HostState::Running,
            1 => HostState::ShuttingDown,
            _ => HostState::Stopped,
        }
    }
}

/// Shutdown signal for background tasks bound to a host.
#[derive(Clone)]
pub struct ShutdownSignal {
    sender: broadcast::Sender<()>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1);
        Self { sender }
    }

    /// Trigger shutdown.
    pub fn trigger(&self) {
        // No subscribers is fine.
        let _ = self.sender.send(());
    }

    /// Subscribe to shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.sender.subscribe()
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks host state transitions and owns the shutdown signal.
pub struct LifecycleManager {
    state: AtomicU8,
    shutdown_signal: ShutdownSignal,
}

impl LifecycleManager {
    /// Create a lifecycle manager in the running state.
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(HostState::Running as u8),
            shutdown_signal: ShutdownSignal::new(),
        }
    }

    /// Get current state.
    pub fn state(&self) -> HostState {
        HostState::from(self.state.load(Ordering::SeqCst))
    }

    /// Check if running.
    pub fn is_running(&self) -> bool {
        self.state() == HostState::Running
    }

    /// Get shutdown signal.
    pub fn shutdown_signal(&self) -> &ShutdownSignal {
        &self.shutdown_signal
    }

    /// Move from `Running` to `ShuttingDown`. Only one caller wins.
    pub fn begin_shutdown(&self) -> Result<(), HostError> {
        self.state
            .compare_exchange(
                HostState::Running as u8,
                HostState::ShuttingDown as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(|current| {
                HostError::InvalidState(format!(
                    "Cannot shut down from state: {:?}",
                    HostState::from(current)
                ))
            })?;

        info!("Pattern host shutting down...");
        self.shutdown_signal.trigger();
        Ok(())
    }

    /// Mark shutdown complete.
    pub fn finish_shutdown(&self) {
        self.state.store(HostState::Stopped as u8, Ordering::SeqCst);
        info!("Pattern host stopped");
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}
