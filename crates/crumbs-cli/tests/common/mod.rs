#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// Create a `crumbs` command isolated from the user's config and terminal.
#[allow(dead_code)]
pub fn crumbs_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crumbs"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("CRUMBS_CONFIG", config_dir().join("config.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Path of a shared fixture from the core crate.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../crumbs-core/tests/fixtures")
        .join(name)
}

/// Run a JSON search and return the `(name, path)` of each result.
#[allow(dead_code)]
pub fn search_json(args: &[&str]) -> Vec<(String, String)> {
    let output = crumbs_cmd()
        .arg("search")
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("run crumbs");
    assert!(output.status.success(), "crumbs failed: {output:?}");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|r| {
            (
                r["name"].as_str().unwrap().to_string(),
                r["path"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}
