//! Depth-first descent shared by the tree-shaped sources.

use crate::{Accumulator, PATH_SEPARATOR, TreeNode};

/// Walk `node`, feeding every leaf into `sink` with its breadcrumb path.
///
/// `path` is the breadcrumb of the node's parent. Each folder extends it by
/// one segment for its children. Leaves are reported in document order.
pub fn walk(node: &TreeNode, path: &str, sink: &mut Accumulator) {
    let mut stack = vec![(node, path.to_string())];

    while let Some((node, path)) = stack.pop() {
        match node {
            TreeNode::Leaf { title, url } => {
                sink.add(title, url, &path);
            },
            TreeNode::Folder { title, children } => {
                let inner = format!("{path}{PATH_SEPARATOR}{title}");
                stack.extend(children.iter().rev().map(|child| (child, inner.clone())));
            },
        }
    }
}
