//! Page template picker visibility.
//!
//! The picker is offered only while editing a `page` whose content is
//! still empty: either no blocks at all, or a single default block that
//! nobody has typed into yet.

use std::sync::Arc;

use patternkit_protocols::editor::{DefaultBlockPolicy, EditorState};

mod default_block;
mod watch;

pub use default_block::DefaultBlockType;
pub use watch::VisibilityWatcher;

/// Post type the template picker is offered for.
pub const DEFAULT_PICKER_POST_TYPE: &str = "page";

/// Evaluates template picker availability and visibility.
///
/// Holds configuration only. Every evaluation reads the editor state afresh,
/// so one picker can be shared between threads and hosts.
#[derive(Clone)]
pub struct TemplatePicker {
    post_type: String,
    default_block: Arc<dyn DefaultBlockPolicy>,
}

impl TemplatePicker {
    pub fn new(post_type: impl Into<String>, default_block: Arc<dyn DefaultBlockPolicy>) -> Self {
        Self {
            post_type: post_type.into(),
            default_block,
        }
    }

    /// The post type the picker applies to.
    pub fn post_type(&self) -> &str {
        &self.post_type
    }

    /// Whether the picker applies to the post being edited.
    pub fn is_available<S: EditorState + ?Sized>(&self, state: &S) -> bool {
        state.current_post_type().as_deref() == Some(self.post_type.as_str())
    }

    /// Whether the content is empty enough to offer a template.
    pub fn is_empty_content<S: EditorState + ?Sized>(&self, state: &S) -> bool {
        let order = state.block_order();
        match order.as_slice() {
            [] => true,
            [only] => state
                .block(only)
                .is_some_and(|block| self.default_block.is_unmodified_default(&block)),
            _ => false,
        }
    }

    /// Whether the picker should be shown.
    pub fn is_visible<S: EditorState + ?Sized>(&self, state: &S) -> bool {
        self.is_empty_content(state) && self.is_available(state)
    }
}

impl Default for TemplatePicker {
    fn default() -> Self {
        Self::new(DEFAULT_PICKER_POST_TYPE, Arc::new(DefaultBlockType::default()))
    }
}

impl std::fmt::Debug for TemplatePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplatePicker")
            .field("post_type", &self.post_type)
            .finish_non_exhaustive()
    }
}

/// [`TemplatePicker::is_available`] with the default configuration.
pub fn is_picker_available<S: EditorState + ?Sized>(state: &S) -> bool {
    TemplatePicker::default().is_available(state)
}

/// [`TemplatePicker::is_visible`] with the default configuration.
pub fn is_picker_visible<S: EditorState + ?Sized>(state: &S) -> bool {
    TemplatePicker::default().is_visible(state)
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
