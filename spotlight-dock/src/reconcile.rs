//! Dock reconciliation.
//!
//! For every listed dock item whose path lies in the managed store, look up a
//! trampoline with the same bundle stem and ask the dock tool to replace the
//! item with it. Items outside the store are never touched.
//!
//! Failures are recorded in the returned [`DockSyncResult`], never raised:
//! a failed listing ends the pass with a single error, a failed replace is
//! recorded and the pass continues.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use spotlight_core::{Bundle, DockSyncResult};

use crate::listing::parse_listing;
use crate::tool::{DockTool, Dockutil};

/// Locate `dockutil` (override or `PATH`) and reconcile against it.
///
/// Returns a zero-valued result without running anything when the tool
/// cannot be found.
pub fn sync_dock(
    trampolines: &[PathBuf],
    dockutil: Option<&Path>,
    store_prefix: &str,
) -> DockSyncResult {
    let tool = Dockutil::locate(dockutil);
    match &tool {
        Some(tool) => tracing::debug!("using dock tool {}", tool.program().display()),
        None => tracing::debug!("dockutil not found; leaving the dock alone"),
    }
    reconcile(trampolines, tool.as_ref(), store_prefix)
}

/// Match store-backed dock items to `trampolines` by name and repin them.
pub fn reconcile<T: DockTool + ?Sized>(
    trampolines: &[PathBuf],
    tool: Option<&T>,
    store_prefix: &str,
) -> DockSyncResult {
    let mut result = DockSyncResult::default();
    let Some(tool) = tool else {
        return result;
    };

    let listing = match tool.list() {
        Ok(listing) => listing,
        Err(e) => {
            tracing::debug!("dock listing failed: {e}");
            result.errors.push(format!("failed to list dock items: {e}"));
            return result;
        }
    };

    let by_stem = index_by_stem(trampolines);

    for item in parse_listing(&listing) {
        if !item.is_managed(store_prefix) {
            continue;
        }

        let Some(trampoline) = by_stem.get(item.name) else {
            tracing::debug!("no trampoline for dock item '{}'", item.name);
            result.skipped += 1;
            continue;
        };

        let new_path = resolve(trampoline);
        match tool.replace(&new_path, item.name) {
            Ok(()) => {
                tracing::info!("repinned '{}' -> {}", item.name, new_path.display());
                result.updated += 1;
            }
            Err(e) => {
                tracing::debug!("failed to repin '{}': {e}", item.name);
                result
                    .errors
                    .push(format!("failed to replace dock item '{}': {e}", item.name));
            }
        }
    }

    result
}

/// Stem → trampoline. Later entries win on duplicate stems.
fn index_by_stem(trampolines: &[PathBuf]) -> HashMap<String, &PathBuf> {
    trampolines
        .iter()
        .map(|path| (Bundle::new(path).stem(), path))
        .collect()
}

fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
