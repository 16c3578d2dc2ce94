//! The default block type and its "unmodified" check.

use serde_json::{Map, Value};

use patternkit_protocols::editor::{Block, DefaultBlockPolicy};

/// Block type inserted when the user starts typing into an empty post.
pub const DEFAULT_BLOCK_NAME: &str = "core/paragraph";

/// A default block type together with the attributes a fresh instance has.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultBlockType {
    name: String,
    default_attributes: Map<String, Value>,
}

impl DefaultBlockType {
    pub fn new(name: impl Into<String>, default_attributes: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            default_attributes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_attributes(&self) -> &Map<String, Value> {
        &self.default_attributes
    }
}

impl Default for DefaultBlockType {
    fn default() -> Self {
        let mut attributes = Map::new();
        attributes.insert("content".to_string(), Value::String(String::new()));
        Self::new(DEFAULT_BLOCK_NAME, attributes)
    }
}

impl DefaultBlockPolicy for DefaultBlockType {
    /// A block is unmodified when it is of the default type and carries every
    /// default attribute with its fresh value. Other attributes are ignored.
    fn is_unmodified_default(&self, block: &Block) -> bool {
        block.name == self.name
            && self
                .default_attributes
                .iter()
                .all(|(key, default)| block.attributes.get(key) == Some(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_paragraph_is_unmodified() {
        let policy = DefaultBlockType::default();
        let block = Block::new("1", "core/paragraph").with_attribute("content", json!(""));
        assert!(policy.is_unmodified_default(&block));
    }

    #[test]
    fn test_paragraph_without_content_is_modified() {
        let policy = DefaultBlockType::default();
        assert!(!policy.is_unmodified_default(&Block::new("1", "core/paragraph")));
    }

    #[test]
    fn test_edited_paragraph_is_modified() {
        let policy = DefaultBlockType::default();
        let block = Block::new("1", "core/paragraph").with_attribute("content", json!("Hello"));
        assert!(!policy.is_unmodified_default(&block));
    }

    #[test]
    fn test_attributes_outside_defaults_are_ignored() {
        let policy = DefaultBlockType::default();
        let block = Block::new("1", "core/paragraph")
            .with_attribute("content", json!(""))
            .with_attribute("dropCap", json!(false))
            .with_attribute("align", json!("center"));
        assert!(policy.is_unmodified_default(&block));
    }

    #[test]
    fn test_null_content_is_modified() {
        let policy = DefaultBlockType::default();
        let block = Block::new("1", "core/paragraph").with_attribute("content", Value::Null);
        assert!(!policy.is_unmodified_default(&block));
    }

    #[test]
    fn test_other_block_type_is_not_default() {
        let policy = DefaultBlockType::default();
        assert!(!policy.is_unmodified_default(&Block::new("1", "core/heading")));
    }

    #[test]
    fn test_custom_default_block() {
        let mut defaults = Map::new();
        defaults.insert("level".to_string(), json!(2));
        let policy = DefaultBlockType::new("core/heading", defaults);

        assert_eq!(policy.name(), "core/heading");
        assert!(policy.is_unmodified_default(
            &Block::new("1", "core/heading").with_attribute("level", json!(2))
        ));
        assert!(!policy.is_unmodified_default(
            &Block::new("1", "core/heading").with_attribute("level", json!(3))
        ));
    }
}
