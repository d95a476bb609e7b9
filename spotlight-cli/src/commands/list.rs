//! `nix-spotlight list` — show what a sync would pick up.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spotlight_sync::discover;
use tabled::{settings::Style, Table, Tabled};

use super::ensure_source_exists;

/// Arguments for `nix-spotlight list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Source directory containing .app bundles.
    pub from: PathBuf,
}

#[derive(Tabled)]
struct BundleRow {
    #[tabled(rename = "bundle")]
    name: String,
    #[tabled(rename = "dock name")]
    stem: String,
    #[tabled(rename = "path")]
    path: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        ensure_source_exists(&self.from)?;

        let rows: Vec<BundleRow> = discover(&self.from)
            .into_iter()
            .map(|bundle| BundleRow {
                name: bundle.name(),
                stem: bundle.stem(),
                path: bundle.root().display().to_string(),
            })
            .collect();

        if rows.is_empty() {
            println!("No app bundles found in {}", self.from.display());
            return Ok(());
        }

        let count = rows.len();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("{count} bundle(s)");
        Ok(())
    }
}
