//! JSON bookmark trees (Chrome's `Bookmarks` file).
//!
//! The document is a mapping of named root containers such as
//! `bookmark_bar` and `other`. A full browser export nests that mapping under
//! `roots`; either shape is accepted. Every root contributes its own title as
//! the first path segment.

use serde_json::{Map, Value};

use super::{SourceKind, SourceParser, tree};
use crate::{Accumulator, TreeNode};

/// Type tag that marks a link.
pub const LEAF_TYPE: &str = "url";

/// Parser for JSON bookmark trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTreeParser;

impl JsonTreeParser {
    /// Create a parser.
    pub const fn new() -> Self {
        Self
    }

    /// Lower the document into one folder per mapping-typed root container.
    pub fn roots(document: &Value) -> Vec<TreeNode> {
        let Some(top) = document.as_object() else {
            return Vec::new();
        };
        let containers = top.get("roots").and_then(Value::as_object).unwrap_or(top);

        containers
            .iter()
            .filter_map(|(key, value)| {
                let container = value.as_object()?;
                let title = title_of(container).unwrap_or(key.as_str()).to_string();
                Some(TreeNode::Folder {
                    title,
                    children: children_of(container),
                })
            })
            .collect()
    }
}

impl SourceParser for JsonTreeParser {
    type Input = Value;

    fn kind(&self) -> SourceKind {
        SourceKind::JsonTree
    }

    fn parse(&self, raw: &Value, sink: &mut Accumulator) {
        for root in Self::roots(raw) {
            tree::walk(&root, "", sink);
        }
    }
}

fn title_of(node: &Map<String, Value>) -> Option<&str> {
    ["name", "title"]
        .into_iter()
        .filter_map(|field| node.get(field).and_then(Value::as_str))
        .find(|title| !title.is_empty())
}

fn children_of(node: &Map<String, Value>) -> Vec<TreeNode> {
    node.get("children")
        .and_then(Value::as_array)
        .map(|children| children.iter().filter_map(lower).collect())
        .unwrap_or_default()
}

fn lower(value: &Value) -> Option<TreeNode> {
    let node = value.as_object()?;
    let title = title_of(node).unwrap_or_default().to_string();

    if node.get("type").and_then(Value::as_str) == Some(LEAF_TYPE) {
        let url = node
            .get("url")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Some(TreeNode::Leaf { title, url })
    } else {
        Some(TreeNode::Folder {
            title,
            children: children_of(node),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::breadcrumb;
    use serde_json::json;

    #[test]
    fn test_root_key_names_untitled_container() {
        let doc = json!({"bar": {"children": [{"type": "url", "title": "T", "url": "U"}]}});

        let records = JsonTreeParser::new().collect(&doc);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "T");
        assert_eq!(records[0].url(), "U");
        assert_eq!(records[0].path(), breadcrumb(["bar"]));
    }

    #[test]
    fn test_reads_full_export_under_roots() {
        let doc = json!({
            "checksum": "",
            "roots": {
                "bookmark_bar": {
                    "name": "Bookmarks Bar",
                    "type": "folder",
                    "children": [
                        {"name": "Docs", "type": "folder", "children": [
                            {"name": "Rust", "type": "url", "url": "https://rust-lang.org"}
                        ]}
                    ]
                }
            },
            "version": 1
        });

        let records = JsonTreeParser::new().collect(&doc);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path(), breadcrumb(["Bookmarks Bar", "Docs"]));
    }

    #[test]
    fn test_skips_non_mapping_roots_and_children() {
        let doc = json!({
            "version": 1,
            "sync_metadata": "abc",
            "other": {"name": "Other", "children": [
                "not a node",
                42,
                {"name": "Kept", "type": "url", "url": "https://kept.example"}
            ]}
        });

        let records = JsonTreeParser::new().collect(&doc);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Kept");
    }

    #[test]
    fn test_invalid_leaves_are_dropped() {
        let doc = json!({"bar": {"children": [
            {"type": "url", "name": "", "url": "https://a.example"},
            {"type": "url", "name": "No url"},
            {"type": "url", "name": "Bookmarklet", "url": "javascript:alert(1)"},
            {"type": "url", "name": "Good", "url": "https://b.example"},
            {"type": "folder", "name": "Missing children"}
        ]}});

        let records = JsonTreeParser::new().collect(&doc);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Good");
    }

    #[test]
    fn test_non_object_document_yields_nothing() {
        assert!(JsonTreeParser::new().collect(&json!([1, 2, 3])).is_empty());
        assert!(JsonTreeParser::new().collect(&Value::Null).is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let doc = json!({
            "b": {"children": [{"type": "url", "name": "x", "url": "u"}]},
            "a": {"children": [{"type": "url", "name": "y", "url": "u"}]}
        });
        let parser = JsonTreeParser::new();

        assert_eq!(parser.collect(&doc), parser.collect(&doc));
    }
}
