//! Configuration for locating bookmark sources.
//!
//! Settings live in a TOML file in the platform config directory, or at the
//! path named by the `CRUMBS_CONFIG` environment variable. Every field has a
//! default matching a stock macOS install, so a missing file is not an error.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [sources]
//! chrome_bookmarks = "/Users/me/Library/Application Support/Google/Chrome/Profile 1/Bookmarks"
//! firefox_profile_suffix = ".default-release"
//!
//! [tools]
//! sqlite3 = "/opt/homebrew/bin/sqlite3"
//!
//! [tabular]
//! links_query = "SELECT b.title, p.url, b.parent FROM moz_bookmarks b, moz_places p WHERE b.type=1 AND b.fk=p.id"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sources::TabularQueries;
use crate::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CRUMBS_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where each browser keeps its bookmarks
    pub sources: SourcesConfig,
    /// External programs used to read sources
    pub tools: ToolsConfig,
    /// Overrides for the tabular dump statements
    pub tabular: TabularConfig,
}

/// Bookmark file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Chrome's JSON `Bookmarks` file.
    pub chrome_bookmarks: PathBuf,
    /// Safari's `Bookmarks.plist`.
    pub safari_bookmarks: PathBuf,
    /// Directory holding Firefox profiles.
    pub firefox_profiles: PathBuf,
    /// Suffix identifying the profile to read; the first match in name order wins.
    pub firefox_profile_suffix: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        let home = home_dir();
        let support = home.join("Library").join("Application Support");
        Self {
            chrome_bookmarks: support
                .join("Google")
                .join("Chrome")
                .join("Default")
                .join("Bookmarks"),
            safari_bookmarks: home.join("Library").join("Safari").join("Bookmarks.plist"),
            firefox_profiles: support.join("Firefox").join("Profiles"),
            firefox_profile_suffix: ".default".to_string(),
        }
    }
}

/// Paths of external programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// `sqlite3` binary, run with `-echo` against `places.sqlite`.
    pub sqlite3: PathBuf,
    /// `plutil` binary, used to convert binary plists to XML.
    pub plutil: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            sqlite3: PathBuf::from("/usr/bin/sqlite3"),
            plutil: PathBuf::from("/usr/bin/plutil"),
        }
    }
}

/// Optional replacements for the stock Firefox statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabularConfig {
    /// Statement producing `(title, url, parent id)` rows.
    pub links_query: Option<String>,
    /// Statement producing `(title, id, parent id)` rows.
    pub folders_query: Option<String>,
}

impl Config {
    /// Load configuration from `CRUMBS_CONFIG` or the default location.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the config directory cannot be determined
    /// or the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not valid configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Render as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the settings cannot be rendered.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Path of the config file in use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no override is set and the platform config
    /// directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let project_dirs = directories::ProjectDirs::from("dev", "crumbs", "crumbs")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Statements for the tabular source, with any overrides applied.
    pub fn tabular_queries(&self) -> TabularQueries {
        let defaults = TabularQueries::default();
        TabularQueries {
            links: self.tabular.links_query.clone().unwrap_or(defaults.links),
            folders: self.tabular.folders_query.clone().unwrap_or(defaults.folders),
        }
    }
}

fn home_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(|| PathBuf::from("."), |base| base.home_dir().to_path_buf())
}
