//! crumbs - search browser bookmarks by name from the command line
//!
//! Parses the CLI, sets up logging, loads configuration and hands off to
//! the command implementations.

use anyhow::Result;
use clap::Parser;
use crumbs_core::Config;

mod cli;
mod commands;
mod output;
mod utils;

use cli::{Cli, Commands};
use utils::initialize_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = load_config(&cli)?;
    execute_command(&cli, &config)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn execute_command(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Search(args) => commands::search(args, config),
        Commands::Sources { format } => commands::list_sources(*format, config),
        Commands::Config { init, force } => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => Config::config_path()?,
            };
            commands::show_config(config, &path, *init, *force)
        },
    }
}
