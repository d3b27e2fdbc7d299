//! Shared helpers for the CLI commands.
//!
//! - [`logging`]: tracing subscriber and color control
//! - [`query`]: turning command-line words into a name prefix
//! - [`source_input`]: reading raw browser data and parsing it

pub mod logging;
pub mod query;
pub mod source_input;

pub use logging::initialize_logging;
pub use query::normalize_query;
pub use source_input::{default_location, load_records};
