//! Editor state observed by the template picker.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A block in the editor's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub client_id: String,
    /// Block type name, e.g. `core/paragraph`.
    pub name: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub inner_blocks: Vec<Block>,
}

impl Block {
    pub fn new(client_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            name: name.into(),
            attributes: Map::new(),
            inner_blocks: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// Read-only queries against the host's editor store.
///
/// Implementations are trusted to return well-formed data; the picker never
/// caches or mutates what it reads.
pub trait EditorState {
    /// Type of the post being edited, if known.
    fn current_post_type(&self) -> Option<String>;

    /// Client ids of the top-level blocks, in document order.
    fn block_order(&self) -> Vec<String>;

    /// Look up a block by client id.
    fn block(&self, client_id: &str) -> Option<Block>;
}

/// Decides whether a block is a default block nobody has edited yet.
pub trait DefaultBlockPolicy: Send + Sync {
    fn is_unmodified_default(&self, block: &Block) -> bool;
}

/// An owned copy of the editor state, e.g. loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    #[serde(default)]
    pub post_type: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl EditorSnapshot {
    pub fn new(post_type: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            post_type: Some(post_type.into()),
            blocks,
        }
    }
}

fn find_block<'a>(blocks: &'a [Block], client_id: &str) -> Option<&'a Block> {
    blocks.iter().find_map(|block| {
        if block.client_id == client_id {
            Some(block)
        } else {
            find_block(&block.inner_blocks, client_id)
        }
    })
}

impl EditorState for EditorSnapshot {
    fn current_post_type(&self) -> Option<String> {
        self.post_type.clone()
    }

    fn block_order(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.client_id.clone()).collect()
    }

    fn block(&self, client_id: &str) -> Option<Block> {
        find_block(&self.blocks, client_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_block_order() {
        let snapshot = EditorSnapshot::new(
            "page",
            vec![Block::new("a", "core/heading"), Block::new("b", "core/paragraph")],
        );
        assert_eq!(snapshot.block_order(), vec!["a", "b"]);
        assert_eq!(snapshot.current_post_type().as_deref(), Some("page"));
    }

    #[test]
    fn test_snapshot_finds_nested_block() {
        let mut group = Block::new("group", "core/group");
        group.inner_blocks.push(Block::new("inner", "core/paragraph"));
        let snapshot = EditorSnapshot::new("post", vec![group]);

        assert_eq!(snapshot.block_order(), vec!["group"]);
        assert_eq!(snapshot.block("inner").unwrap().name, "core/paragraph");
        assert!(snapshot.block("missing").is_none());
    }

    #[test]
    fn test_snapshot_from_json() {
        let snapshot: EditorSnapshot = serde_json::from_value(json!({
            "postType": "page",
            "blocks": [
                { "clientId": "1", "name": "core/paragraph", "attributes": { "content": "" } }
            ]
        }))
        .unwrap();

        assert_eq!(snapshot.post_type.as_deref(), Some("page"));
        assert_eq!(snapshot.blocks[0].attributes["content"], json!(""));
        assert!(snapshot.blocks[0].inner_blocks.is_empty());
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = EditorSnapshot::default();
        assert!(snapshot.current_post_type().is_none());
        assert!(snapshot.block_order().is_empty());
    }
}
