//! Block pattern records.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Open property mapping supplied by the contributor of a pattern.
pub type PatternProperties = Map<String, Value>;

/// Key under which the registry embeds the pattern's own name.
pub const NAME_KEY: &str = "name";

/// A registered block pattern.
///
/// The property map always carries a `name` entry equal to [`Pattern::name`];
/// any `name` the contributor supplied is overwritten on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    name: String,
    properties: PatternProperties,
}

impl Pattern {
    /// Build a pattern, forcing the `name` property to `name`.
    pub fn new(name: impl Into<String>, mut properties: PatternProperties) -> Self {
        let name = name.into();
        properties.insert(NAME_KEY.to_string(), Value::String(name.clone()));
        Self { name, properties }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All properties, including the injected `name`.
    pub fn properties(&self) -> &PatternProperties {
        &self.properties
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Human readable title, read from `title` and falling back to `label`.
    pub fn title(&self) -> Option<&str> {
        self.str_property("title")
            .or_else(|| self.str_property("label"))
    }

    /// Serialized block markup inserted when the pattern is chosen.
    pub fn content(&self) -> Option<&str> {
        self.str_property("content")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_property("description")
    }

    pub fn categories(&self) -> Vec<&str> {
        self.str_list_property("categories")
    }

    pub fn keywords(&self) -> Vec<&str> {
        self.str_list_property("keywords")
    }

    /// Width used when rendering the pattern preview.
    pub fn viewport_width(&self) -> Option<u64> {
        self.properties.get("viewportWidth").and_then(Value::as_u64)
    }

    fn str_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    fn str_list_property(&self, key: &str) -> Vec<&str> {
        match self.properties.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.properties.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> PatternProperties {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_name_is_injected() {
        let pattern = Pattern::new("core/hero", props(json!({ "title": "Hero" })));
        assert_eq!(pattern.name(), "core/hero");
        assert_eq!(pattern.get("name"), Some(&json!("core/hero")));
    }

    #[test]
    fn test_supplied_name_is_overwritten() {
        let pattern = Pattern::new("core/hero", props(json!({ "name": "something-else" })));
        assert_eq!(pattern.get("name"), Some(&json!("core/hero")));
        assert_eq!(pattern.properties().len(), 1);
    }

    #[test]
    fn test_title_falls_back_to_label() {
        let labelled = Pattern::new("a", props(json!({ "label": "Label" })));
        assert_eq!(labelled.title(), Some("Label"));

        let titled = Pattern::new("b", props(json!({ "title": "Title", "label": "Label" })));
        assert_eq!(titled.title(), Some("Title"));
    }

    #[test]
    fn test_well_known_properties() {
        let pattern = Pattern::new(
            "core/two-columns",
            props(json!({
                "content": "<!-- wp:columns /-->",
                "description": "Two columns of text",
                "categories": ["text", "columns", 3],
                "keywords": ["layout"],
                "viewportWidth": 1000
            })),
        );

        assert_eq!(pattern.content(), Some("<!-- wp:columns /-->"));
        assert_eq!(pattern.description(), Some("Two columns of text"));
        assert_eq!(pattern.categories(), vec!["text", "columns"]);
        assert_eq!(pattern.keywords(), vec!["layout"]);
        assert_eq!(pattern.viewport_width(), Some(1000));
    }

    #[test]
    fn test_missing_properties() {
        let pattern = Pattern::new("bare", PatternProperties::new());
        assert!(pattern.title().is_none());
        assert!(pattern.content().is_none());
        assert!(pattern.categories().is_empty());
        assert!(pattern.viewport_width().is_none());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let pattern = Pattern::new("core/hero", props(json!({ "title": "Hero" })));
        let value = serde_json::to_value(&pattern).unwrap();
        assert_eq!(value, json!({ "title": "Hero", "name": "core/hero" }));
    }
}
