//! Re-evaluates picker visibility whenever the editor state changes.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use patternkit_protocols::editor::EditorSnapshot;

use super::TemplatePicker;

/// Watches editor snapshots and publishes picker visibility.
///
/// The published value only changes when visibility actually flips, so
/// subscribers are not woken for edits that keep the answer the same.
pub struct VisibilityWatcher {
    picker: Arc<TemplatePicker>,
    snapshots: watch::Receiver<EditorSnapshot>,
    visible: watch::Sender<bool>,
    shutdown: broadcast::Receiver<()>,
}

impl VisibilityWatcher {
    /// Create a watcher and the receiver its results are published on.
    ///
    /// The initial value is computed from the current snapshot.
    pub fn new(
        picker: Arc<TemplatePicker>,
        mut snapshots: watch::Receiver<EditorSnapshot>,
        shutdown: broadcast::Receiver<()>,
    ) -> (Self, watch::Receiver<bool>) {
        let initial = picker.is_visible(&*snapshots.borrow_and_update());
        let (visible, receiver) = watch::channel(initial);

        let watcher = Self {
            picker,
            snapshots,
            visible,
            shutdown,
        };
        (watcher, receiver)
    }

    /// Run until the snapshot sender is dropped or shutdown is signalled.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                changed = self.snapshots.changed() => {
                    if changed.is_err() {
                        debug!("Editor snapshot source closed, stopping visibility watcher");
                        break;
                    }
                    self.evaluate();
                }
                _ = self.shutdown.recv() => {
                    debug!("Shutdown signalled, stopping visibility watcher");
                    break;
                }
            }
        }
    }

    /// Spawn [`run`](Self::run) on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    fn evaluate(&mut self) {
        let visible = self.picker.is_visible(&*self.snapshots.borrow_and_update());
        let flipped = self.visible.send_if_modified(|current| {
            if *current == visible {
                false
            } else {
                *current = visible;
                true
            }
        });

        if flipped {
            debug!(visible, "Template picker visibility changed");
        } else {
            trace!(visible, "Template picker visibility unchanged");
        }
    }
}
