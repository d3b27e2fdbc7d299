//! Pipe-delimited `SQLite` dumps (Firefox's `places.sqlite`).
//!
//! The caller runs two queries through `sqlite3 -echo` and hands over the
//! combined output:
//!
//! ```text
//! SELECT b.title, p.url, b.parent FROM moz_bookmarks b, moz_places p WHERE b.type=1 AND b.fk=p.id
//! Rust|https://www.rust-lang.org|3
//! Tom|Jerry|https://example.com|3
//! SELECT b.title, b.id, b.parent FROM moz_bookmarks b WHERE b.type=2
//! Bookmarks Toolbar|3|1
//! ```
//!
//! The first block lists links as `(title, url, parent id)`, the second lists
//! folders as `(title, id, parent id)`, and the echoed second query separates
//! them. Titles may themselves contain `|`, so surplus leading fields are
//! merged back into the title.
//!
//! Parsing runs in two phases. [`TabularParser::ingest`] collects links with
//! their raw parent id as a provisional token together with the folder graph,
//! then [`TabularDump::resolve`] turns each token into a breadcrumb and only
//! then builds records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{SourceKind, SourceParser};
use crate::{Accumulator, FolderGraph, FolderNode};

/// Query listing every link with its parent folder id.
pub const FIREFOX_LINKS_QUERY: &str = "SELECT b.title, p.url, b.parent FROM moz_bookmarks b, moz_places p WHERE b.type=1 AND b.fk=p.id";

/// Query listing every folder with its own id and its parent folder id.
pub const FIREFOX_FOLDERS_QUERY: &str =
    "SELECT b.title, b.id, b.parent FROM moz_bookmarks b WHERE b.type=2";

const FIELDS_PER_ROW: usize = 3;

/// The two statements whose echoed output forms a dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularQueries {
    /// Statement producing `(title, url, parent id)` rows.
    pub links: String,
    /// Statement producing `(title, id, parent id)` rows.
    pub folders: String,
}

impl Default for TabularQueries {
    fn default() -> Self {
        Self {
            links: FIREFOX_LINKS_QUERY.to_string(),
            folders: FIREFOX_FOLDERS_QUERY.to_string(),
        }
    }
}

impl TabularQueries {
    /// Both statements as a single `sqlite3` argument.
    pub fn command_argument(&self) -> String {
        format!("{}; {}", self.links, self.folders)
    }

    fn is_folders_echo(&self, line: &str) -> bool {
        line.trim_end_matches(';').trim_end() == self.folders
    }
}

/// Split `line` on `|` and merge leading fields until at most `count` remain.
///
/// Only the first field may contain pipes, so joining surplus fields back
/// into it restores the original title.
///
/// ```rust
/// use crumbs_core::sources::merge_fields;
///
/// assert_eq!(merge_fields("a|b|url|4", 3), vec!["a|b", "url", "4"]);
/// assert_eq!(merge_fields("a|url", 3), vec!["a", "url"]);
/// ```
pub fn merge_fields(line: &str, count: usize) -> Vec<String> {
    let fields: Vec<&str> = line.split('|').collect();
    let count = count.max(1);

    if fields.len() <= count {
        return fields.into_iter().map(str::to_string).collect();
    }

    let split = fields.len() - count + 1;
    std::iter::once(fields[..split].join("|"))
        .chain(fields[split..].iter().map(|field| (*field).to_string()))
        .collect()
}

/// A link whose folder path has not been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLink {
    /// Link title.
    pub name: String,
    /// Link target.
    pub url: String,
    /// Raw parent folder id, as it appeared in the dump.
    pub parent: String,
}

impl PendingLink {
    /// Parent folder id, if the provisional token is an integer.
    pub fn parent_id(&self) -> Option<i64> {
        self.parent.trim().parse().ok()
    }
}

/// Output of the ingest phase: unresolved links plus the folder graph.
#[derive(Debug, Default, Clone)]
pub struct TabularDump {
    /// Links in dump order.
    pub links: Vec<PendingLink>,
    /// Folders keyed by id.
    pub folders: FolderGraph,
}

impl TabularDump {
    /// Resolve every link's folder path and feed it into `sink`.
    ///
    /// A parent id that is not an integer, or not a known folder, resolves to
    /// the empty path.
    pub fn resolve(&self, sink: &mut Accumulator) {
        for link in &self.links {
            let path = link
                .parent_id()
                .map(|id| self.folders.resolve_path(id))
                .unwrap_or_default();
            sink.add(&link.name, &link.url, &path);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Preamble,
    Links,
    Folders,
}

/// Parser for `sqlite3 -echo` bookmark dumps.
#[derive(Debug, Default, Clone)]
pub struct TabularParser {
    queries: TabularQueries,
}

impl TabularParser {
    /// Parser for the stock Firefox queries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser expecting custom statements.
    pub const fn with_queries(queries: TabularQueries) -> Self {
        Self { queries }
    }

    /// Statements this parser expects to see echoed.
    pub const fn queries(&self) -> &TabularQueries {
        &self.queries
    }

    /// First phase: collect pending links and folders from a dump.
    ///
    /// Rows with fewer than three fields are skipped, as are folder rows
    /// with an empty title or a non-integer id or parent. Without an echoed
    /// folder query every row is read as a link with an empty path; a
    /// truncated dump still lists its links rather than yielding nothing.
    pub fn ingest(&self, raw: &str) -> TabularDump {
        let mut dump = TabularDump::default();
        let mut segment = Segment::Preamble;

        for line in raw.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }

            match segment {
                Segment::Preamble => {
                    if self.queries.is_folders_echo(line) {
                        segment = Segment::Folders;
                    } else {
                        if line.trim_end_matches(';').trim_end() != self.queries.links {
                            debug!(line, "first line of dump is not the echoed link query");
                        }
                        segment = Segment::Links;
                    }
                },
                Segment::Links if self.queries.is_folders_echo(line) => {
                    segment = Segment::Folders;
                },
                Segment::Links => {
                    if let Some(link) = link_row(line) {
                        dump.links.push(link);
                    }
                },
                Segment::Folders => {
                    if let Some(folder) = folder_row(line) {
                        dump.folders.insert(folder);
                    }
                },
            }
        }

        debug!(
            links = dump.links.len(),
            folders = dump.folders.len(),
            "ingested tabular dump"
        );
        dump
    }
}

impl SourceParser for TabularParser {
    type Input = str;

    fn kind(&self) -> SourceKind {
        SourceKind::Tabular
    }

    fn parse(&self, raw: &str, sink: &mut Accumulator) {
        if raw.trim().is_empty() {
            return;
        }
        self.ingest(raw).resolve(sink);
    }
}

fn row(line: &str) -> Option<[String; FIELDS_PER_ROW]> {
    let fields: [String; FIELDS_PER_ROW] = merge_fields(line, FIELDS_PER_ROW).try_into().ok()?;
    Some(fields)
}

fn link_row(line: &str) -> Option<PendingLink> {
    let Some([name, url, parent]) = row(line) else {
        debug!(line, "skipping malformed link row");
        return None;
    };
    Some(PendingLink { name, url, parent })
}

fn folder_row(line: &str) -> Option<FolderNode> {
    let Some([title, id, parent]) = row(line) else {
        debug!(line, "skipping malformed folder row");
        return None;
    };
    if title.is_empty() {
        return None;
    }

    match (id.trim().parse(), parent.trim().parse()) {
        (Ok(id), Ok(parent_id)) => Some(FolderNode {
            id,
            title,
            parent_id,
        }),
        _ => {
            debug!(line, "skipping folder row with non-numeric ids");
            None
        },
    }
}
