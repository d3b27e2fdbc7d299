//! Property-list bookmark trees (Safari's `Bookmarks.plist`).
//!
//! The root dictionary is untitled; each entry of its `Children` array is a
//! top-level folder. Nodes are told apart by `WebBookmarkType`: leaves carry
//! their title in `URIDictionary.title` and their url in `URLString`, proxies
//! (History) are skipped, and everything else is treated as a folder.

use super::{SourceKind, SourceParser, tree};
use crate::plist::PlistValue;
use crate::{Accumulator, TreeNode};

/// Discriminator value of a real link.
pub const LEAF_TYPE: &str = "WebBookmarkTypeLeaf";
/// Discriminator value of placeholder nodes such as History.
pub const PROXY_TYPE: &str = "WebBookmarkTypeProxy";

const TYPE_KEY: &str = "WebBookmarkType";
const CHILDREN_KEY: &str = "Children";
const TITLE_KEY: &str = "Title";

/// Parser for property-list bookmark trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlistTreeParser;

impl PlistTreeParser {
    /// Create a parser.
    pub const fn new() -> Self {
        Self
    }

    /// Lower the root dictionary's children into top-level nodes.
    pub fn roots(document: &PlistValue) -> Vec<TreeNode> {
        children_of(document)
    }
}

impl SourceParser for PlistTreeParser {
    type Input = PlistValue;

    fn kind(&self) -> SourceKind {
        SourceKind::PlistTree
    }

    fn parse(&self, raw: &PlistValue, sink: &mut Accumulator) {
        for root in Self::roots(raw) {
            tree::walk(&root, "", sink);
        }
    }
}

fn string_at<'a>(node: &'a PlistValue, key: &str) -> &'a str {
    node.get(key).and_then(PlistValue::as_str).unwrap_or_default()
}

fn children_of(node: &PlistValue) -> Vec<TreeNode> {
    node.get(CHILDREN_KEY)
        .and_then(PlistValue::as_array)
        .map(|children| children.iter().filter_map(lower).collect())
        .unwrap_or_default()
}

fn lower(node: &PlistValue) -> Option<TreeNode> {
    node.as_dict()?;

    match string_at(node, TYPE_KEY) {
        LEAF_TYPE => {
            let title = node
                .get("URIDictionary")
                .map(|uri| string_at(uri, "title"))
                .unwrap_or_default();
            Some(TreeNode::leaf(title, string_at(node, "URLString")))
        },
        PROXY_TYPE => None,
        _ => Some(TreeNode::folder(
            string_at(node, TITLE_KEY),
            children_of(node),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::breadcrumb;
    use crate::plist::parse_xml;

    fn parse(body: &str) -> Vec<crate::BookmarkRecord> {
        let doc = parse_xml(&format!("<plist version=\"1.0\">{body}</plist>"))
            .expect("fixture should decode");
        PlistTreeParser::new().collect(&doc)
    }

    fn leaf(title: &str, url: &str) -> String {
        format!(
            "<dict><key>URIDictionary</key><dict><key>title</key><string>{title}</string></dict>\
             <key>URLString</key><string>{url}</string>\
             <key>WebBookmarkType</key><string>WebBookmarkTypeLeaf</string></dict>"
        )
    }

    #[test]
    fn test_nested_folders_build_path() {
        let records = parse(&format!(
            "<dict><key>Title</key><string></string><key>Children</key><array>\
               <dict><key>Title</key><string>BookmarksBar</string>\
                 <key>WebBookmarkType</key><string>WebBookmarkTypeList</string>\
                 <key>Children</key><array>\
                   <dict><key>Title</key><string>Work</string>\
                     <key>WebBookmarkType</key><string>WebBookmarkTypeList</string>\
                     <key>Children</key><array>{}</array></dict>\
                   {}\
                 </array></dict>\
             </array></dict>",
            leaf("Deep", "https://deep.example"),
            leaf("Shallow", "https://shallow.example"),
        ));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "Deep");
        assert_eq!(records[0].path(), breadcrumb(["BookmarksBar", "Work"]));
        assert_eq!(records[1].name(), "Shallow");
        assert_eq!(records[1].path(), breadcrumb(["BookmarksBar"]));
    }

    #[test]
    fn test_proxy_nodes_are_skipped() {
        let records = parse(&format!(
            "<dict><key>Children</key><array>\
               <dict><key>Title</key><string>History</string>\
                 <key>WebBookmarkType</key><string>WebBookmarkTypeProxy</string>\
                 <key>Children</key><array>{}</array></dict>\
             </array></dict>",
            leaf("Visited", "https://visited.example"),
        ));

        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_or_malformed_children_are_empty() {
        let records = parse(
            "<dict><key>Children</key><array>\
               <dict><key>Title</key><string>No children</string></dict>\
               <dict><key>Title</key><string>Wrong children</string>\
                 <key>Children</key><string>oops</string></dict>\
               <string>not a dict</string>\
             </array></dict>",
        );

        assert!(records.is_empty());
    }

    #[test]
    fn test_leaf_without_uri_dictionary_is_dropped() {
        let records = parse(
            "<dict><key>Children</key><array>\
               <dict><key>Title</key><string>Bar</string><key>Children</key><array>\
                 <dict><key>URLString</key><string>https://a.example</string>\
                   <key>WebBookmarkType</key><string>WebBookmarkTypeLeaf</string></dict>\
               </array></dict>\
             </array></dict>",
        );

        assert!(records.is_empty());
    }

    fn nested_folders(depth: usize) -> String {
        let open = "<dict><key>Title</key><string>F</string><key>Children</key><array>";
        format!(
            "<plist version=\"1.0\"><dict><key>Children</key><array>{}{}{}</array></dict></plist>",
            open.repeat(depth),
            leaf("Deep", "https://deep.example"),
            "</array></dict>".repeat(depth)
        )
    }

    #[test]
    fn test_deep_folders_within_nesting_limit() {
        let doc = parse_xml(&nested_folders(250)).expect("fixture should decode");
        let records = PlistTreeParser::new().collect(&doc);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path(), breadcrumb(vec!["F"; 250]));
    }

    #[test]
    fn test_overly_deep_document_is_rejected_before_parsing() {
        assert!(parse_xml(&nested_folders(50_000)).is_err());
    }

    #[test]
    fn test_non_dict_document_yields_nothing() {
        assert!(PlistTreeParser::new()
            .collect(&PlistValue::Array(Vec::new()))
            .is_empty());
    }
}
