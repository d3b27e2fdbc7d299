//! Prefix filtering and ordering of parsed records.
//!
//! Matching lower-cases both sides with Unicode case folding and tests for a
//! literal prefix. Ordering compares `name`, then `path`, with `str`'s own
//! `Ord`, which is byte order of the UTF-8 encoding. Uppercase ASCII therefore
//! sorts before lowercase (`"A" < "B" < "a"`).

use std::cmp::Ordering;

use crate::BookmarkRecord;

/// Whether `record`'s name starts with `query`, ignoring case.
///
/// An empty query matches everything.
pub fn matches_query(record: &BookmarkRecord, query: &str) -> bool {
    name_starts_with(record, &query.to_lowercase())
}

/// `needle` must already be lower-cased.
fn name_starts_with(record: &BookmarkRecord, needle: &str) -> bool {
    needle.is_empty() || record.name().to_lowercase().starts_with(needle)
}

/// Keep records whose name starts with `query` and sort them by name, then path.
///
/// The sort is stable, so records equal in both keys keep their input order.
pub fn filter_and_sort<I>(records: I, query: &str) -> Vec<BookmarkRecord>
where
    I: IntoIterator<Item = BookmarkRecord>,
{
    let needle = query.to_lowercase();
    let mut kept: Vec<BookmarkRecord> = records
        .into_iter()
        .filter(|record| name_starts_with(record, &needle))
        .collect();

    kept.sort_by(compare);
    kept
}

fn compare(a: &BookmarkRecord, b: &BookmarkRecord) -> Ordering {
    a.name().cmp(b.name()).then_with(|| a.path().cmp(b.path()))
}
