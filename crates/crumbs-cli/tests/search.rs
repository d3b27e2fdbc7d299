#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{crumbs_cmd, fixture, search_json};
use predicates::prelude::*;

const ARROW: &str = " \u{2192} ";

fn names(results: &[(String, String)]) -> Vec<&str> {
    results.iter().map(|(name, _)| name.as_str()).collect()
}

#[test]
fn chrome_dump_lists_valid_bookmarks_sorted() {
    let input = fixture("chrome_bookmarks.json");
    let results = search_json(&["bc", "--input", input.to_str().unwrap()]);

    assert_eq!(names(&results), ["NAME 1", "NAME 2", "NAME 3", "NAME 4"]);
    assert!(results[0].1.ends_with(&format!("FOLDER 1{ARROW}FOLDER 2")));
}

#[test]
fn firefox_dump_resolves_folder_paths() {
    let input = fixture("firefox_dump.txt");
    let results = search_json(&["firefox", "-i", input.to_str().unwrap()]);

    assert_eq!(names(&results), ["NAME 1", "NAME 2", "NAME 4", "NAME|3"]);
    assert_eq!(
        results[0].1,
        format!("{ARROW}BookmarksBar{ARROW}FOLDER 1{ARROW}FOLDER|2")
    );
    assert_eq!(results[2].1, format!("{ARROW}BookmarksMenu"));
}

#[test]
fn safari_dump_skips_invalid_entries() {
    let input = fixture("safari_bookmarks.xml");
    let results = search_json(&["bs", "--input", input.to_str().unwrap()]);

    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|(name, _)| !name.is_empty()));
}

#[test]
fn query_is_case_insensitive_prefix() {
    let input = fixture("firefox_dump.txt");
    let input = input.to_str().unwrap();

    assert_eq!(names(&search_json(&["bf", "name", "1", "-i", input])), ["NAME 1"]);
    assert_eq!(names(&search_json(&["bf", "NAME\\ 4", "-i", input])), ["NAME 4"]);
    assert!(search_json(&["bf", "1", "-i", input]).is_empty());
}

#[test]
fn limit_truncates_after_sorting() {
    let input = fixture("chrome_bookmarks.json");
    let results = search_json(&["bc", "-n", "2", "-i", input.to_str().unwrap()]);

    assert_eq!(names(&results), ["NAME 1", "NAME 2"]);
}

#[test]
fn stdin_input_is_supported() {
    let raw = std::fs::read_to_string(fixture("firefox_dump.txt")).expect("fixture");

    crumbs_cmd()
        .args(["search", "bf", "NAME|", "--input", "-", "--format", "json"])
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicate::str::contains("URL 3"))
        .stdout(predicate::str::contains("URL 1").not());
}

#[test]
fn text_output_shows_breadcrumb() {
    let input = fixture("firefox_dump.txt");

    crumbs_cmd()
        .args(["search", "bf", "name 4", "-i", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME 4"))
        .stdout(predicate::str::contains("URL 4"))
        .stdout(predicate::str::contains("\u{2192} BookmarksMenu"));
}

#[test]
fn missing_input_is_an_empty_result() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");

    crumbs_cmd()
        .args(["search", "bc", "--input", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks found."));
}

#[test]
fn malformed_document_is_an_empty_result() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ \"roots\": ").expect("write");

    let results = search_json(&["bc", "-i", broken.to_str().unwrap()]);
    assert!(results.is_empty());
}

#[test]
fn unknown_source_fails() {
    crumbs_cmd()
        .args(["search", "opera", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("opera"));
}
