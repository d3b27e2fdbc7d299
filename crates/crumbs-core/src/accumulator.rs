//! The single sink every source parser feeds.
//!
//! Exported bookmark data is full of separators, placeholders and
//! bookmarklets. Those entries are dropped here, silently, so that one bad
//! record never stops the rest of a source from being read.

use crate::BookmarkRecord;
use tracing::trace;

/// URL prefix of bookmarklets, which are never kept.
pub const SCRIPT_SCHEME: &str = "javascript:";

/// Collects valid bookmark records for one query.
///
/// An accumulator belongs to a single invocation; build a fresh one for
/// every parse instead of sharing it between callers.
#[derive(Debug, Default)]
pub struct Accumulator {
    records: Vec<BookmarkRecord>,
    dropped: usize,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a bookmark if it is acceptable.
    ///
    /// The entry is kept iff `name` and `url` are non-empty and `url` does not
    /// start with [`SCRIPT_SCHEME`] (case-sensitive). Returns whether it was kept.
    pub fn add(&mut self, name: &str, url: &str, path: &str) -> bool {
        if !is_acceptable(name, url) {
            trace!(name, url, "dropping bookmark");
            self.dropped += 1;
            return false;
        }

        self.records.push(BookmarkRecord::new(
            name.to_string(),
            url.to_string(),
            path.to_string(),
        ));
        true
    }

    /// Number of records kept so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been kept.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of entries rejected so far.
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Records kept so far, in insertion order.
    pub fn records(&self) -> &[BookmarkRecord] {
        &self.records
    }

    /// Consume the accumulator, yielding its records.
    pub fn into_records(self) -> Vec<BookmarkRecord> {
        self.records
    }
}

fn is_acceptable(name: &str, url: &str) -> bool {
    !name.is_empty() && !url.is_empty() && !url.starts_with(SCRIPT_SCHEME)
}
