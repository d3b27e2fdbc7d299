//! Parent-pointer folder graph reconstructed from a tabular dump.
//!
//! Folders arrive as flat `(id, title, parent id)` rows. Paths are rebuilt by
//! walking parent links upward until an id has no entry, which is how a root
//! folder ends its chain. The walk is iterative and stops on the first
//! repeated id, so cyclic or absurdly deep data still terminates.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{FolderNode, breadcrumb};

/// Upper bound on the number of folders a single path may contain.
pub const MAX_FOLDER_DEPTH: usize = 256;

/// Folder id to folder mapping for the duration of one parse.
#[derive(Debug, Default, Clone)]
pub struct FolderGraph {
    folders: HashMap<i64, FolderNode>,
}

impl FolderGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a folder, replacing any earlier row with the same id.
    pub fn insert(&mut self, node: FolderNode) {
        self.folders.insert(node.id, node);
    }

    /// Look up a folder by id.
    pub fn get(&self, id: i64) -> Option<&FolderNode> {
        self.folders.get(&id)
    }

    /// Number of folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the graph holds no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Titles of `folder_id` and its ancestors, outermost first.
    ///
    /// A lookup miss ends the chain. So does revisiting an id, or exceeding
    /// [`MAX_FOLDER_DEPTH`].
    pub fn ancestors(&self, folder_id: i64) -> Vec<&str> {
        let mut titles = Vec::new();
        let mut seen = HashSet::new();
        let mut current = folder_id;

        while let Some(folder) = self.folders.get(&current) {
            if !seen.insert(current) {
                debug!(folder_id, repeated = current, "folder cycle detected");
                break;
            }
            if titles.len() == MAX_FOLDER_DEPTH {
                debug!(folder_id, "folder chain exceeds maximum depth");
                break;
            }
            titles.push(folder.title.as_str());
            current = folder.parent_id;
        }

        titles.reverse();
        titles
    }

    /// Breadcrumb path for a bookmark whose parent is `folder_id`.
    ///
    /// An unknown `folder_id` yields the empty path.
    pub fn resolve_path(&self, folder_id: i64) -> String {
        breadcrumb(self.ancestors(folder_id))
    }
}

impl FromIterator<FolderNode> for FolderGraph {
    fn from_iter<T: IntoIterator<Item = FolderNode>>(iter: T) -> Self {
        let mut graph = Self::new();
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}

/// Resolve `folder_id` to a breadcrumb path using `folders`.
pub fn resolve_path(folder_id: i64, folders: &FolderGraph) -> String {
    folders.resolve_path(folder_id)
}
