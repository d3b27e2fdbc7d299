//! # CLI Structure and Argument Parsing
//!
//! ```bash
//! # Chrome bookmarks whose name starts with "rust"
//! crumbs search bc rust
//!
//! # Firefox, from a saved `sqlite3 -echo` dump, as JSON
//! crumbs search firefox --input places.txt --format json
//!
//! # Where each source is read from
//! crumbs sources
//!
//! # Write the default configuration so it can be edited
//! crumbs config --init
//! ```

use clap::{Args, Parser, Subcommand};
use crumbs_core::SourceKind;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Search bookmarks from Chrome, Safari and Firefox by name.
#[derive(Parser, Clone, Debug)]
#[command(name = "crumbs", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to configuration file. Also via `CRUMBS_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "CRUMBS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List bookmarks from one source whose name starts with QUERY
    Search(SearchArgs),

    /// Show the supported sources and where they are read from
    Sources {
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the configuration in effect, or write it to the config file
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,

        /// Replace an existing config file (with `--init`)
        #[arg(long, requires = "init")]
        force: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// Source to read: chrome-bookmark (bc), safari-bookmark (bs) or firefox-bookmark (bf)
    #[arg(value_parser = parse_source)]
    pub source: SourceKind,

    /// Name prefix to match, case-insensitively; empty lists everything
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Read raw source data from FILE instead of the browser's default location (`-` for stdin)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum number of bookmarks to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

fn parse_source(value: &str) -> Result<SourceKind, String> {
    value.parse().map_err(|e: crumbs_core::Error| e.to_string())
}
