//! Config validation logic.
//! Verifies the configured root (existence, directory, readability) and mode ranges.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use super::types::Config;

const MAX_MODE: u32 = 0o7777;

impl Config {
    /// Validate the root (when one is configured) and the default modes.
    pub fn validate(&self) -> Result<()> {
        ensure_mode_in_range(self.file_mode, "file_mode")?;
        ensure_mode_in_range(self.dir_mode, "dir_mode")?;

        if let Some(root) = &self.root {
            ensure_dir_exists_and_is_dir(root, "root")?;
            ensure_readable(root, "root")?;
        }

        info!(
            "Config validated: root='{}' file_mode={:o} dir_mode={:o}",
            self.root
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<working directory>".into()),
            self.file_mode,
            self.dir_mode
        );
        Ok(())
    }
}

fn ensure_mode_in_range(mode: u32, name: &str) -> Result<()> {
    if mode > MAX_MODE {
        error!("{name} out of range: {mode:o}");
        bail!("{name} {mode:o} is out of range (max {MAX_MODE:o})");
    }
    Ok(())
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        bail!("{name} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &str) -> Result<()> {
    fs::read_dir(path).with_context(|| {
        format!("Cannot read {name} directory '{}'; check permissions", path.display())
    })?;
    debug!("{name} readable: {}", path.display());
    Ok(())
}
