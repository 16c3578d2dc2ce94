//! Host construction and pattern registration from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use patternkit_config::{Config, ConfigError, PatternOrigin};
use patternkit_core::{DefaultBlockType, HostConfig, PatternHost};
use patternkit_protocols::error::RegistryError;

/// A pattern definition the registry refused.
#[derive(Debug)]
pub(crate) struct Rejected {
    pub origin: PatternOrigin,
    pub error: RegistryError,
}

/// Build a host from the picker settings in `config`.
pub(crate) fn create_host(config: &Config) -> PatternHost {
    PatternHost::create(HostConfig {
        picker_post_type: config.picker.post_type.clone(),
        default_block: Arc::new(DefaultBlockType::new(
            config.picker.default_block.clone(),
            config.picker.default_attributes.clone(),
        )),
        ..HostConfig::default()
    })
}

/// Register every configured pattern definition on the host.
///
/// A bad definition is logged and skipped; only unreadable sources fail.
pub(crate) fn register_patterns(
    host: &PatternHost,
    config: &Config,
) -> Result<Vec<Rejected>, ConfigError> {
    let registry = host.registry();
    let mut rejected = Vec::new();

    for definition in config.pattern_definitions()? {
        if let Err(error) = registry.register_value(&definition.definition) {
            warn!(origin = %definition.origin, "Skipping pattern definition: {}", error);
            rejected.push(Rejected {
                origin: definition.origin,
                error,
            });
        }
    }

    info!(
        registered = registry.len(),
        rejected = rejected.len(),
        "Patterns loaded"
    );
    Ok(rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternkit_protocols::editor::{Block, EditorSnapshot};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_create_host_uses_picker_config() {
        let mut config = Config::default();
        config.picker.post_type = "landing".to_string();
        config.picker.default_block = "core/heading".to_string();
        config.picker.default_attributes = serde_json::Map::new();

        let host = create_host(&config);
        let picker = host.picker();
        assert_eq!(picker.post_type(), "landing");
        assert!(picker.is_visible(&EditorSnapshot::new(
            "landing",
            vec![Block::new("1", "core/heading")]
        )));
        assert!(!picker.is_visible(&EditorSnapshot::new(
            "landing",
            vec![Block::new("1", "core/paragraph")]
        )));
    }

    #[test]
    fn test_register_patterns_from_inline_and_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("hero.json"),
            r#"{ "name": "core/hero", "title": "Hero", "content": "<!-- wp:cover /-->" }"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.patterns.directories = vec![dir.path().display().to_string()];
        config.patterns.inline = vec![
            json!({ "name": "core/quote", "content": "<!-- wp:quote /-->" }),
            json!({ "name": 5 }),
            json!({ "name": "core/hero", "title": "Hero override" }),
        ];

        let host = create_host(&config);
        let rejected = register_patterns(&host, &config).unwrap();

        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].origin, PatternOrigin::Inline(1));
        assert!(matches!(rejected[0].error, RegistryError::InvalidName(_)));

        let registry = host.registry();
        assert_eq!(registry.names(), vec!["core/hero", "core/quote"]);
        let hero = registry.get("core/hero").unwrap();
        assert_eq!(hero.title(), Some("Hero override"));
        assert!(hero.content().is_none());
    }
}
