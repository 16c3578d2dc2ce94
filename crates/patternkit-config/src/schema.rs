//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub patterns: PatternsConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// When set, logs are also written to daily rolling files here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Console log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Template picker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Post type the picker is offered for.
    #[serde(default = "default_post_type")]
    pub post_type: String,

    /// Block type a blank post starts with.
    #[serde(default = "default_block")]
    pub default_block: String,

    /// Attributes of a freshly inserted default block.
    #[serde(default = "default_block_attributes")]
    pub default_attributes: Map<String, Value>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            post_type: default_post_type(),
            default_block: default_block(),
            default_attributes: default_block_attributes(),
        }
    }
}

fn default_post_type() -> String {
    "page".to_string()
}

fn default_block() -> String {
    "core/paragraph".to_string()
}

fn default_block_attributes() -> Map<String, Value> {
    let mut attributes = Map::new();
    attributes.insert("content".to_string(), Value::String(String::new()));
    attributes
}

/// Where pattern definitions come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternsConfig {
    /// Directories scanned for `*.json` pattern definitions.
    #[serde(default)]
    pub directories: Vec<String>,

    /// Definitions written directly in the config file. Kept untyped so a
    /// malformed entry is reported by the registry instead of failing the load.
    #[serde(default)]
    pub inline: Vec<Value>,
}
