pub mod list;
pub mod sync;

use std::path::Path;

use anyhow::{bail, Context, Result};
use spotlight_core::{config, Config, ConfigError};

/// Fail early when the source directory is missing; discovery itself treats
/// a missing directory as empty.
pub(crate) fn ensure_source_exists(from: &Path) -> Result<()> {
    if !from.exists() {
        bail!("source directory does not exist: {}", from.display());
    }
    Ok(())
}

/// Load the user config, falling back to defaults when no config directory exists.
pub(crate) fn load_config() -> Result<Config> {
    match config::load() {
        Ok(config) => Ok(config),
        Err(ConfigError::ConfigDirNotFound) => Ok(Config::default()),
        Err(err) => Err(err).context("failed to load configuration"),
    }
}
