//! Error types and handling for crumbs-core operations.
//!
//! Parsing bookmark sources never fails: malformed rows and nodes are skipped
//! and missing input simply yields no records. The error type below therefore
//! only covers the surfaces around the parsers, such as loading configuration,
//! decoding an XML property list, or naming an unknown source.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading or writing configuration files
//! - **Parse Errors**: undecodable property-list documents
//! - **Configuration Errors**: invalid settings or config files
//! - **Source Errors**: a source name that matches no known kind
//! - **Serialization Errors**: rendering the configuration as TOML
//!
//! ```rust
//! use crumbs_core::SourceKind;
//!
//! match "opera".parse::<SourceKind>() {
//!     Ok(kind) => println!("parsing {kind}"),
//!     Err(e) => println!("{} ({})", e, e.category()),
//! }
//! ```

use thiserror::Error;

/// The main error type for crumbs-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// The underlying `std::io::Error` is preserved so callers can inspect
    /// the kind (not found, permission denied, ...).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A source document could not be decoded.
    ///
    /// Raised by the property-list decoder when the XML is malformed or does
    /// not describe a property list. Callers treat this the same way as a
    /// missing source: zero records.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in the config file
    /// - Config directory cannot be determined or created
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source name did not match any known bookmark source.
    #[error("Unknown bookmark source: {0}")]
    UnknownSource(String),

    /// Serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Useful for grouping errors in logs.
    ///
    /// ```rust
    /// use crumbs_core::Error;
    ///
    /// assert_eq!(Error::Parse("bad".into()).category(), "parse");
    /// assert_eq!(Error::UnknownSource("opera".into()).category(), "source");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::UnknownSource(_) => "source",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
