//! Bundle discovery.
//!
//! Candidates are entries named `*.app` directly under the source directory
//! or one level below it (`KDE/Dolphin.app`). Symbolic links are followed,
//! dot-prefixed names are candidates like any other, and only bundles that
//! pass [`Bundle::validate`] are returned.
//!
//! Unreadable or missing directories produce no candidates rather than an
//! error; callers check that the source exists before syncing.

use std::path::Path;

use spotlight_core::{Bundle, BUNDLE_SUFFIX};
use walkdir::{DirEntry, WalkDir};

/// Maximum depth below the source root at which bundles are recognised.
const MAX_DEPTH: usize = 2;

/// Find all valid bundles under `source`, in sorted file-name order.
pub fn discover(source: &Path) -> Vec<Bundle> {
    WalkDir::new(source)
        .min_depth(1)
        .max_depth(MAX_DEPTH)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(is_bundle_name)
        .map(|entry| Bundle::new(entry.path()))
        .filter(|bundle| match bundle.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("ignoring {}: {e}", bundle.root().display());
                false
            }
        })
        .collect()
}

fn is_bundle_name(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().ends_with(BUNDLE_SUFFIX)
}
