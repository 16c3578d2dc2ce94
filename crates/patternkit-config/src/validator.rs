//! Configuration validation.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_picker(config, &mut result);
        Self::validate_directories(config, &mut result);
        Self::validate_inline_patterns(config, &mut result);

        Ok(result)
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        } else if !level.contains('=') && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            // Directives such as `patternkit=debug` are passed through untouched.
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!("Unknown log level '{}', valid values: {:?}", level, LOG_LEVELS),
            ));
        }
    }

    fn validate_picker(config: &Config, result: &mut ValidationResult) {
        if config.picker.post_type.trim().is_empty() {
            result.add_error(ValidationError::new(
                "picker.post_type",
                "Picker post type cannot be empty",
            ));
        }

        if config.picker.default_block.trim().is_empty() {
            result.add_error(ValidationError::new(
                "picker.default_block",
                "Default block name cannot be empty",
            ));
        }
    }

    fn validate_directories(config: &Config, result: &mut ValidationResult) {
        for (i, dir) in config.pattern_directories().iter().enumerate() {
            if !dir.is_dir() {
                result.add_warning(ValidationWarning::new(
                    format!("patterns.directories[{}]", i),
                    format!("Pattern directory does not exist: {:?}", dir),
                ));
            }
        }
    }

    fn validate_inline_patterns(config: &Config, result: &mut ValidationResult) {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (i, definition) in config.patterns.inline.iter().enumerate() {
            let path = format!("patterns.inline[{}]", i);

            let Value::Object(properties) = definition else {
                result.add_error(ValidationError::new(path, "Pattern definition must be a table"));
                continue;
            };

            let name = match properties.get("name") {
                Some(Value::String(name)) if !name.is_empty() => name.as_str(),
                _ => {
                    result.add_error(ValidationError::new(
                        format!("{}.name", path),
                        "Pattern name must be a non-empty string",
                    ));
                    continue;
                }
            };

            if let Some(first) = seen.insert(name, i) {
                result.add_warning(ValidationWarning::new(
                    format!("{}.name", path),
                    format!(
                        "Pattern '{}' is also defined at patterns.inline[{}]; the later definition replaces it",
                        name, first
                    ),
                ));
            }

            if !properties.contains_key("content") {
                result.add_warning(ValidationWarning::new(
                    format!("{}.content", path),
                    format!("Pattern '{}' has no content", name),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
