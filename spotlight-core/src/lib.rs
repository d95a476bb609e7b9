//! nix-spotlight core library — bundle model, dock result type, config, errors.
//!
//! Public API surface:
//! - [`types`] — [`Bundle`] and [`DockSyncResult`]
//! - [`error`] — [`BundleError`], [`ConfigError`]
//! - [`config`] — optional YAML configuration file

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{BundleError, ConfigError};
pub use types::{
    Bundle, DockSyncResult, BUNDLE_SUFFIX, CONTENTS_DIR, MANIFEST_FILE, STORE_PREFIX,
};
