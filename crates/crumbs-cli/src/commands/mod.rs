//! Command implementations for the crumbs CLI

mod config;
mod search;
mod sources;

pub use config::execute as show_config;
pub use search::execute as search;
pub use sources::execute as list_sources;
