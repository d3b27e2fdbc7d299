//! # crumbs-core
//!
//! Core functionality for crumbs - normalized, breadcrumbed bookmarks from
//! every browser on the machine.
//!
//! Chrome, Safari and Firefox each store "a named link inside nested folders"
//! in an unrelated shape: a JSON tree, a property-list tree, and a `SQLite`
//! table whose folders point at their parents. This crate turns all three
//! into the same [`BookmarkRecord`] list, each record carrying a breadcrumb
//! path such as `" → Bookmarks Bar → Rust"`.
//!
//! ## Architecture
//!
//! - **Sources**: one parser per layout, all feeding an [`Accumulator`]
//! - **Accumulator**: drops untitled, url-less and `javascript:` entries
//! - **Folder graph**: resolves parent-id chains into breadcrumbs
//! - **Filter**: case-insensitive prefix match plus name/path ordering
//!
//! The parsers do no I/O and never fail; reading files and running
//! `sqlite3`/`plutil` is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use crumbs_core::sources::{JsonTreeParser, SourceParser};
//! use crumbs_core::filter_and_sort;
//!
//! let doc = serde_json::json!({
//!     "bar": {"children": [{"type": "url", "title": "T", "url": "U"}]}
//! });
//!
//! let records = filter_and_sort(JsonTreeParser::new().collect(&doc), "");
//! assert_eq!(records[0].path(), " \u{2192} bar");
//! ```

/// Validating sink shared by every parser
pub mod accumulator;
/// Source location and tool configuration
pub mod config;
/// Error types and result aliases
pub mod error;
/// Prefix filter and ordering
pub mod filter;
/// Parent-pointer folder graph
pub mod folder_graph;
/// XML property-list decoding
pub mod plist;
/// Per-browser source parsers
pub mod sources;
/// Core data types
pub mod types;

pub use accumulator::Accumulator;
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{filter_and_sort, matches_query};
pub use folder_graph::{FolderGraph, resolve_path};
pub use sources::{SourceKind, SourceParser};
pub use types::*;
