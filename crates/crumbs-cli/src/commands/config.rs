//! Config command implementation

use std::path::Path;

use anyhow::{Result, bail};
use crumbs_core::Config;

/// Print the effective configuration, or write it to `path` with `init`.
pub fn execute(config: &Config, path: &Path, init: bool, force: bool) -> Result<()> {
    if !init {
        println!("# {}", path.display());
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if path.exists() && !force {
        bail!("{} already exists; pass --force to replace it", path.display());
    }
    config.save_to(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
