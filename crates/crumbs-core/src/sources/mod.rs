//! Bookmark source parsers.
//!
//! Three browsers, three storage layouts, one contract: every parser takes the
//! raw data its source produces (already read by the caller) and feeds each
//! leaf link it finds into a caller-supplied [`Accumulator`].
//!
//! | Kind | Browser | Input |
//! |------|---------|-------|
//! | [`SourceKind::JsonTree`] | Chrome | decoded `Bookmarks` JSON |
//! | [`SourceKind::PlistTree`] | Safari | decoded `Bookmarks.plist` |
//! | [`SourceKind::Tabular`] | Firefox | `sqlite3 -echo` text dump |
//!
//! None of the parsers can fail. Missing input yields no records and a
//! malformed row or node is skipped.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{Accumulator, BookmarkRecord, Error};

pub mod json_tree;
pub mod plist_tree;
pub mod tabular;
pub mod tree;

pub use json_tree::JsonTreeParser;
pub use plist_tree::PlistTreeParser;
pub use tabular::{PendingLink, TabularDump, TabularParser, TabularQueries, merge_fields};

/// Produces bookmark records from raw input of a known shape.
pub trait SourceParser {
    /// Raw input this parser consumes.
    type Input: ?Sized;

    /// Which source this parser reads.
    fn kind(&self) -> SourceKind;

    /// Feed every leaf link found in `raw` into `sink`.
    fn parse(&self, raw: &Self::Input, sink: &mut Accumulator);

    /// Parse into a fresh accumulator and return its records.
    fn collect(&self, raw: &Self::Input) -> Vec<BookmarkRecord> {
        let mut sink = Accumulator::new();
        self.parse(raw, &mut sink);
        tracing::debug!(
            source = %self.kind(),
            kept = sink.len(),
            dropped = sink.dropped(),
            "parsed bookmark source"
        );
        sink.into_records()
    }
}

/// The storage layouts understood by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// JSON tree of named root containers (Chrome).
    JsonTree,
    /// Nested property-list tree (Safari).
    PlistTree,
    /// Pipe-delimited `SQLite` dump with a parent-pointer folder graph (Firefox).
    Tabular,
}

impl SourceKind {
    /// Every kind, in display order.
    pub const fn all() -> [Self; 3] {
        [Self::JsonTree, Self::PlistTree, Self::Tabular]
    }

    /// Canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JsonTree => "chrome-bookmark",
            Self::PlistTree => "safari-bookmark",
            Self::Tabular => "firefox-bookmark",
        }
    }

    /// Browser that stores bookmarks this way.
    pub const fn browser(self) -> &'static str {
        match self {
            Self::JsonTree => "Chrome",
            Self::PlistTree => "Safari",
            Self::Tabular => "Firefox",
        }
    }

    /// Names accepted by [`FromStr`], canonical name first.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::JsonTree => &["chrome-bookmark", "bc", "chrome", "json"],
            Self::PlistTree => &["safari-bookmark", "bs", "safari", "plist"],
            Self::Tabular => &["firefox-bookmark", "bf", "firefox", "sqlite", "tabular"],
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|kind| kind.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| Error::UnknownSource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_alias() {
        for kind in SourceKind::all() {
            for alias in kind.aliases() {
                assert_eq!(alias.parse::<SourceKind>().ok(), Some(kind), "{alias}");
            }
        }
    }

    #[test]
    fn test_parsing_ignores_case_and_padding() {
        assert_eq!("  BC ".parse::<SourceKind>().ok(), Some(SourceKind::JsonTree));
        assert_eq!("Firefox".parse::<SourceKind>().ok(), Some(SourceKind::Tabular));
    }

    #[test]
    fn test_unknown_source_is_an_error() {
        let err = "opera".parse::<SourceKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownSource(name) if name == "opera"));
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(SourceKind::PlistTree.to_string(), "safari-bookmark");
        assert_eq!(SourceKind::Tabular.aliases()[0], SourceKind::Tabular.as_str());
    }
}
