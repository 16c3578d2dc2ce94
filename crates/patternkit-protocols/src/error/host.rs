//! Host lifecycle errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Invalid host state: {0}")]
    InvalidState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_error() {
        let err = HostError::InvalidState("already stopped".to_string());
        let display = err.to_string();
        assert!(display.contains("Invalid host state"));
        assert!(display.contains("already stopped"));
    }

    #[test]
    fn test_error_debug() {
        let err = HostError::InvalidState("x".to_string());
        assert!(format!("{:?}", err).contains("InvalidState"));
    }
}
