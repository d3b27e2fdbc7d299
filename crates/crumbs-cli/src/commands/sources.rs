//! Sources command implementation

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use crumbs_core::{Config, SourceKind};
use serde::Serialize;

use crate::output::OutputFormat;
use crate::utils::default_location;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SourceInfo {
    source: &'static str,
    browser: &'static str,
    aliases: &'static [&'static str],
    location: Option<String>,
}

/// Execute the sources command
pub fn execute(format: OutputFormat, config: &Config) -> Result<()> {
    let sources: Vec<SourceInfo> = SourceKind::all()
        .into_iter()
        .map(|kind| SourceInfo {
            source: kind.as_str(),
            browser: kind.browser(),
            aliases: kind.aliases(),
            location: default_location(kind, config).map(|p| p.display().to_string()),
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &sources)?;
            writeln!(out)?;
        },
        OutputFormat::Text => {
            for info in &sources {
                writeln!(
                    out,
                    "{} ({}) [{}]",
                    info.source.bold(),
                    info.browser,
                    info.aliases.join(", ")
                )?;
                let location = info.location.as_deref().unwrap_or("not found");
                writeln!(out, "  {}", location.dimmed())?;
            }
        },
    }
    out.flush()?;
    Ok(())
}
