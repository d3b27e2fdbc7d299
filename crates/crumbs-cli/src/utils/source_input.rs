//! Reading raw bookmark data and handing it to the matching parser.
//!
//! Browsers that are not installed, unreadable files and failing helper
//! programs are all normal here: they are logged as warnings and produce no
//! bookmarks instead of an error exit.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use crumbs_core::plist::parse_xml;
use crumbs_core::sources::{JsonTreeParser, PlistTreeParser, TabularParser};
use crumbs_core::{BookmarkRecord, Config, SourceKind, SourceParser};
use tracing::{debug, warn};

/// Collect every bookmark of `kind`, reading `input` if given or the
/// configured default location otherwise.
pub fn load_records(kind: SourceKind, config: &Config, input: Option<&Path>) -> Vec<BookmarkRecord> {
    let raw = match input {
        Some(path) => read_input(path),
        None => fetch_default(kind, config),
    };

    match raw {
        Ok(raw) => parse_raw(kind, config, &raw),
        Err(e) => {
            warn!("{kind} bookmarks unavailable: {e:#}");
            Vec::new()
        },
    }
}

/// Decode `raw` as `kind`'s format and parse it.
///
/// Undecodable documents yield no records.
pub fn parse_raw(kind: SourceKind, config: &Config, raw: &str) -> Vec<BookmarkRecord> {
    if raw.trim().is_empty() {
        debug!(source = %kind, "no source data");
        return Vec::new();
    }

    match kind {
        SourceKind::JsonTree => match serde_json::from_str(raw) {
            Ok(doc) => JsonTreeParser::new().collect(&doc),
            Err(e) => {
                warn!("{kind} bookmarks are not valid JSON: {e}");
                Vec::new()
            },
        },
        SourceKind::PlistTree => match parse_xml(raw) {
            Ok(doc) => PlistTreeParser::new().collect(&doc),
            Err(e) => {
                warn!("{kind} bookmarks are not a readable property list: {e}");
                Vec::new()
            },
        },
        SourceKind::Tabular => TabularParser::with_queries(config.tabular_queries()).collect(raw),
    }
}

/// Where `kind` is read from by default, if it can be determined.
pub fn default_location(kind: SourceKind, config: &Config) -> Option<PathBuf> {
    match kind {
        SourceKind::JsonTree => Some(config.sources.chrome_bookmarks.clone()),
        SourceKind::PlistTree => Some(config.sources.safari_bookmarks.clone()),
        SourceKind::Tabular => firefox_profile(config).map(|profile| profile.join("places.sqlite")),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn fetch_default(kind: SourceKind, config: &Config) -> Result<String> {
    match kind {
        SourceKind::JsonTree => read_input(&config.sources.chrome_bookmarks),
        SourceKind::PlistTree => {
            let plist = &config.sources.safari_bookmarks;
            if !plist.exists() {
                return Err(anyhow!("{} does not exist", plist.display()));
            }
            run(
                &config.tools.plutil,
                &[
                    "-convert".into(),
                    "xml1".into(),
                    "-o".into(),
                    "-".into(),
                    plist.into(),
                ],
            )
        },
        SourceKind::Tabular => {
            let database = default_location(kind, config).ok_or_else(|| {
                anyhow!(
                    "no Firefox profile ending in '{}' under {}",
                    config.sources.firefox_profile_suffix,
                    config.sources.firefox_profiles.display()
                )
            })?;
            run(
                &config.tools.sqlite3,
                &[
                    "-echo".into(),
                    database.into(),
                    config.tabular_queries().command_argument().into(),
                ],
            )
        },
    }
}

/// First profile directory, in name order, whose name ends with the configured suffix.
fn firefox_profile(config: &Config) -> Option<PathBuf> {
    let suffix = &config.sources.firefox_profile_suffix;
    let mut profiles: Vec<PathBuf> = fs::read_dir(&config.sources.firefox_profiles)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(suffix.as_str()))
        })
        .collect();

    profiles.sort();
    profiles.into_iter().next()
}

/// Run `program` and return its stdout.
///
/// A non-zero exit is logged but whatever the program printed is still used,
/// since `sqlite3` reports a failing second statement after printing the first.
fn run(program: &Path, args: &[OsString]) -> Result<String> {
    debug!(program = %program.display(), ?args, "running helper");
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to run {}", program.display()))?;

    if !output.status.success() {
        warn!(
            "{} exited with {}: {}",
            program.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
