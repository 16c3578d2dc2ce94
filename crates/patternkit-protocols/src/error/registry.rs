//! Registry errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Pattern name must be a non-empty string: {0}")]
    InvalidName(String),

    #[error("Pattern definition must be an object: {0}")]
    InvalidDefinition(String),

    #[error("Pattern \"{0}\" not found")]
    NotFound(String),

    #[error("Pattern host has been shut down")]
    HostStopped,
}
