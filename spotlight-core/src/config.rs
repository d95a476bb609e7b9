//! Optional user configuration.
//!
//! # Storage layout
//!
//! ```text
//! <config_dir>/            (~/.config on Linux, ~/Library/Application Support on macOS)
//!   nix-spotlight/
//!     config.yaml
//! ```
//!
//! Every field is optional; a missing file yields [`Config::default`].
//! Command-line flags take precedence over anything loaded here.
//!
//! As with the rest of the workspace, `load_at(dir)` takes an explicit base
//! directory and `load()` derives it from `dirs::config_dir()`. Tests must
//! only call `load_at`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::STORE_PREFIX;

const APP_DIR: &str = "nix-spotlight";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Dock items whose path contains this string are reconciled.
    pub store_prefix: String,
    /// Explicit path to the `dockutil` executable; `PATH` is searched otherwise.
    pub dockutil: Option<PathBuf>,
    /// Set to `false` to never touch the dock.
    pub dock: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_prefix: STORE_PREFIX.to_string(),
            dockutil: None,
            dock: true,
        }
    }
}

/// `<base>/nix-spotlight/config.yaml` — pure, no I/O.
pub fn config_path_at(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// Load the config file under `base`, falling back to defaults if absent.
pub fn load_at(base: &Path) -> Result<Config, ConfigError> {
    let path = config_path_at(base);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    // An empty file deserializes to `null`, which serde_yaml rejects for a struct.
    if raw.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
}

/// Load the config file from the platform config directory.
pub fn load() -> Result<Config, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
    load_at(&base)
}
