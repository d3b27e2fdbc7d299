//! # Output Formatting
//!
//! - **Text**: one block per bookmark (name, url, folder breadcrumb)
//! - **JSON**: a single pretty-printed array for scripting
//!
//! ```bash
//! crumbs search bc rust --format json | jq '.[].url'
//! ```

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use crumbs_core::BookmarkRecord;

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty text output (default)
    Text,
    /// Single JSON array
    Json,
}

impl OutputFormat {
    /// Whether this format is meant for programs rather than people.
    pub const fn is_machine(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Write `records` to stdout in `format`.
pub fn print_records(records: &[BookmarkRecord], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, records, format)?;
    out.flush()?;
    Ok(())
}

/// Write `records` to `out` in `format`.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[BookmarkRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        },
        OutputFormat::Text => {
            if records.is_empty() {
                writeln!(out, "No bookmarks found.")?;
                return Ok(());
            }
            for record in records {
                writeln!(out, "{}", record.name().bold())?;
                writeln!(out, "  {}", record.url().cyan())?;
                writeln!(out, "  {}", record.subtitle().dimmed())?;
            }
        },
    }
    Ok(())
}
