//! Search command implementation

use anyhow::Result;
use crumbs_core::{Config, filter_and_sort};
use tracing::debug;

use crate::cli::SearchArgs;
use crate::output::print_records;
use crate::utils::{load_records, normalize_query};

/// Execute the search command
pub fn execute(args: &SearchArgs, config: &Config) -> Result<()> {
    let query = normalize_query(&args.query);
    let records = load_records(args.source, config, args.input.as_deref());
    let total = records.len();

    let mut matches = filter_and_sort(records, &query);
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    debug!(source = %args.source, query = %query, total, shown = matches.len(), "search finished");
    print_records(&matches, args.format)
}
