//! # patternkit Core
//!
//! Runtime pieces of patternkit.
//!
//! ## Components
//!
//! - [`PatternHost`] - Owns the shared pattern registry and its lifecycle
//! - [`PatternRegistry`] - Ordered name to pattern store with soft error reporting
//! - [`TemplatePicker`] - Decides whether the page template picker is shown
//! - [`VisibilityWatcher`] - Re-evaluates picker visibility as editor snapshots change
//!
//! The registry and the picker share no state; a host can use either alone.

pub mod diagnostics;
pub mod host;
pub mod lifecycle;
pub mod picker;
pub mod registry;

pub use diagnostics::{MemorySink, TracingSink};
pub use host::{HostConfig, PatternHost};
pub use lifecycle::{HostState, LifecycleManager, ShutdownSignal};
pub use picker::{
    is_picker_available, is_picker_visible, DefaultBlockType, TemplatePicker, VisibilityWatcher,
};
pub use registry::PatternRegistry;
