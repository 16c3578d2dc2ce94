//! Pattern registry.

mod base;
mod pattern;

pub use base::{BaseRegistry, Registerable, Sealed};
pub use pattern::PatternRegistry;
