//! Error types for the patternkit protocol layer.

mod host;
mod registry;

pub use host::*;
pub use registry::*;
