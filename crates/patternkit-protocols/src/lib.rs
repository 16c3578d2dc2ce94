//! # patternkit Protocols
//!
//! Shared definitions for the patternkit workspace.
//! Contains data types, traits and errors - no registry or picker logic.
//!
//! ## Core Types
//!
//! - [`Pattern`] - A registered block pattern
//! - [`PatternRegistryAccess`] - The registration surface offered to contributors
//! - [`DiagnosticSink`] - Where misuse diagnostics are reported
//! - [`EditorState`] - Read-only view of the editor used by the template picker
//! - [`DefaultBlockPolicy`] - Decides whether a block is an untouched default block

pub mod diagnostic;
pub mod editor;
pub mod error;
pub mod pattern;
pub mod registry;

pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use editor::{Block, DefaultBlockPolicy, EditorSnapshot, EditorState};
pub use error::{HostError, RegistryError};
pub use pattern::{Pattern, PatternProperties};
pub use registry::PatternRegistryAccess;
