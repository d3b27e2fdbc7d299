use serde::Serialize;

/// Separator placed before every folder title in a breadcrumb path.
pub const PATH_SEPARATOR: &str = " \u{2192} ";

/// Subtitle shown for records that live outside any folder.
pub const NO_FOLDER_HINT: &str = "Action this item to open the URL in the browser ...";

/// A normalized bookmark: a named link plus the folders it lives in.
///
/// Records are only built by [`crate::Accumulator`], which guarantees a
/// non-empty name, a non-empty url and no `javascript:` url. The path is
/// final once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookmarkRecord {
    name: String,
    url: String,
    path: String,
}

impl BookmarkRecord {
    pub(crate) const fn new(name: String, url: String, path: String) -> Self {
        Self { name, url, path }
    }

    /// Display name of the bookmark.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Breadcrumb of enclosing folders, outermost first, e.g. `" → Bar → Work"`.
    ///
    /// Empty when the bookmark has no resolvable folder.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path for display, or [`NO_FOLDER_HINT`] when there is none.
    pub fn subtitle(&self) -> &str {
        if self.path.is_empty() {
            NO_FOLDER_HINT
        } else {
            &self.path
        }
    }
}

/// Build a breadcrumb from folder titles ordered outermost first.
///
/// Every segment is preceded by [`PATH_SEPARATOR`]; no segments yield `""`.
pub fn breadcrumb<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments.into_iter().fold(String::new(), |mut path, segment| {
        path.push_str(PATH_SEPARATOR);
        path.push_str(segment.as_ref());
        path
    })
}

/// One node of a bookmark tree after source-specific decoding.
///
/// The JSON and property-list sources both lower their documents into this
/// shape so the descent in [`crate::sources::tree`] handles every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// An actual link.
    Leaf {
        /// Link title.
        title: String,
        /// Link target.
        url: String,
    },
    /// A container of further nodes, in document order.
    Folder {
        /// Folder title, contributed as one path segment.
        title: String,
        /// Child nodes.
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Convenience constructor for a leaf.
    pub fn leaf(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Leaf {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Convenience constructor for a folder.
    pub fn folder(title: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Folder {
            title: title.into(),
            children,
        }
    }
}

/// A folder row from a tabular dump: its title and the id of its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    /// Folder id.
    pub id: i64,
    /// Folder title.
    pub title: String,
    /// Id of the enclosing folder.
    pub parent_id: i64,
}
