//! Error types for spotlight-core.

use std::path::PathBuf;

use thiserror::Error;

/// Returned by [`Bundle::validate`](crate::Bundle::validate).
#[derive(Debug, Error)]
pub enum BundleError {
    /// `Contents/Info.plist` is absent — the directory is not an application bundle.
    #[error("not a valid bundle: manifest missing at {path}")]
    MissingManifest { path: PathBuf },
}

/// All errors that can arise from loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure other than "file not found".
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::config_dir()` returned `None`.
    #[error("cannot determine config directory; set $HOME or $XDG_CONFIG_HOME")]
    ConfigDirNotFound,
}
