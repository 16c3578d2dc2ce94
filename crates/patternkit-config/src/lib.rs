//! # patternkit Config
//!
//! Configuration management for patternkit: the TOML schema, loading with
//! environment expansion, pattern definition discovery and validation.

mod error;
mod loader;
mod schema;
mod sources;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use sources::{load_pattern_dir, PatternDefinition, PatternOrigin};
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
