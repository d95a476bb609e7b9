//! `nix-spotlight sync` — rebuild trampolines and repoint dock items.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use colored::Colorize;
use spotlight_core::DockSyncResult;
use spotlight_dock::sync_dock;

use super::{ensure_source_exists, load_config};

/// Arguments for `nix-spotlight sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Source directory containing .app bundles.
    pub from: PathBuf,

    /// Target directory for trampolines. Its previous contents are deleted.
    pub to: PathBuf,

    /// Skip dock syncing.
    #[arg(long)]
    pub no_dock: bool,

    /// Path to the dockutil binary (searched on PATH by default).
    #[arg(long, value_name = "PATH")]
    pub dockutil: Option<PathBuf>,

    /// Only dock items whose path contains this prefix are repointed.
    #[arg(long, value_name = "PREFIX", value_parser = NonEmptyStringValueParser::new())]
    pub store_prefix: Option<String>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        ensure_source_exists(&self.from)?;
        // Dock settings are the only consumer of the config file.
        let config = if self.no_dock {
            None
        } else {
            Some(load_config()?)
        };
        let dock = match config {
            Some(config) if config.dock => {
                let store_prefix = self.store_prefix.unwrap_or(config.store_prefix);
                if store_prefix.is_empty() {
                    bail!("store prefix must not be empty");
                }
                Some((self.dockutil.or(config.dockutil), store_prefix))
            }
            _ => None,
        };

        let report = spotlight_sync::sync(&self.from, &self.to).with_context(|| {
            format!(
                "failed to sync {} into {}",
                self.from.display(),
                self.to.display()
            )
        })?;

        if let Some((dockutil, store_prefix)) = dock {
            let result = sync_dock(&report.trampolines, dockutil.as_deref(), &store_prefix);
            tracing::info!(
                updated = result.updated,
                skipped = result.skipped,
                errors = result.errors.len(),
                "dock reconciled"
            );
            print_dock_warnings(&result);
        } else {
            tracing::debug!("dock sync disabled");
        }

        println!("Synced {} apps to {}", report.len(), self.to.display());
        Ok(())
    }
}

fn print_dock_warnings(result: &DockSyncResult) {
    if result.is_clean() {
        return;
    }
    for error in &result.errors {
        eprintln!("{} {error}", "warning:".yellow().bold());
    }
}
