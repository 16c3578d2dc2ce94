//! Configuration loader.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(\$)?\{([^}]+)\}").expect("environment variable pattern is valid")
});

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file, or defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    ///
    /// Expansion covers the whole file, pattern content included. Write
    /// `$${VAR}` to keep a literal `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = String::with_capacity(content.len());
        let mut last = 0;

        for cap in ENV_VAR.captures_iter(content) {
            let Some(whole) = cap.get(0) else { continue };
            result.push_str(&content[last..whole.start()]);
            last = whole.end();

            let var_name = &cap[2];
            if cap.get(1).is_some() {
                result.push_str("${");
                result.push_str(var_name);
                result.push('}');
                continue;
            }

            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result.push_str(&var_value);
        }

        result.push_str(&content[last..]);
        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.config`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LogFormat;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.picker.post_type, "page");
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [logging]
            level = "debug"
            format = "json"
            directory = "/var/log/patternkit"

            [picker]
            post_type = "landing"
            default_block = "core/heading"

            [picker.default_attributes]
            level = 2

            [patterns]
            directories = ["./patterns"]

            [[patterns.inline]]
            name = "core/text-two-columns"
            title = "Two columns of text"
            categories = ["text"]
            viewportWidth = 1000
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.directory.as_deref(), Some("/var/log/patternkit"));
        assert_eq!(config.picker.post_type, "landing");
        assert_eq!(config.picker.default_block, "core/heading");
        assert_eq!(config.picker.default_attributes["level"], json!(2));
        assert_eq!(config.patterns.directories, vec!["./patterns"]);
        assert_eq!(
            config.patterns.inline[0],
            json!({
                "name": "core/text-two-columns",
                "title": "Two columns of text",
                "categories": ["text"],
                "viewportWidth": 1000
            })
        );
    }

    #[test]
    fn test_inline_pattern_with_non_string_name_loads() {
        let content = r#"
            [[patterns.inline]]
            name = 42
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.patterns.inline[0]["name"], json!(42));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[picker]").unwrap();
        writeln!(file, "post_type = \"wp_template\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.picker.post_type, "wp_template");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "invalid = [unclosed";
        let result = ConfigLoader::load_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_keeps_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[picker").unwrap();

        let result = ConfigLoader::load_or_default(file.path());
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("PATTERNKIT_TEST_CONFIG_VAR", "test_value");
        }
        let content = "value = \"${PATTERNKIT_TEST_CONFIG_VAR}\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert!(expanded.contains("test_value"));
        unsafe {
            std::env::remove_var("PATTERNKIT_TEST_CONFIG_VAR");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_TEST_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_escaped_env_var_is_kept_literal() {
        let content = "content = \"<!-- wp:html -->$${PATTERNKIT_UNSET_TEMPLATE_VAR}<!-- /wp:html -->\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(
            expanded,
            "content = \"<!-- wp:html -->${PATTERNKIT_UNSET_TEMPLATE_VAR}<!-- /wp:html -->\""
        );
    }

    #[test]
    fn test_inline_pattern_with_escaped_placeholder_loads() {
        let content = r#"
            [[patterns.inline]]
            name = "core/price"
            content = "<p>$${price}</p>"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.patterns.inline[0]["content"], json!("<p>${price}</p>"));
    }

    #[test]
    fn test_expand_path_no_tilde() {
        let path = "/usr/local/share/patterns";
        assert_eq!(ConfigLoader::expand_path(path), path);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/patterns");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/patterns"));
    }
}
