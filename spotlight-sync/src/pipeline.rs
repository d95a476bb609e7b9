//! Full mirror rebuild.
//!
//! ## `sync` — 4-step protocol
//!
//! 1. Remove the target directory (if any) and recreate it empty.
//! 2. Discover valid bundles in the source directory.
//! 3. Build one trampoline per bundle, in discovery order.
//! 4. Touch every trampoline once all of them exist, so file indexers that
//!    coalesce events during bulk creation still see each entry change.
//!
//! The target is derived state: nothing in it survives a sync unless the
//! current source reproduces it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use filetime::{set_file_times, FileTime};

use crate::discovery::discover;
use crate::error::{io_err, SyncError};
use crate::trampoline::build_trampoline;

/// Outcome of one [`sync`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The rebuilt target directory.
    pub target: PathBuf,
    /// Created trampoline directories, in build order.
    pub trampolines: Vec<PathBuf>,
}

impl SyncReport {
    pub fn len(&self) -> usize {
        self.trampolines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trampolines.is_empty()
    }
}

/// Rebuild `target` so it holds exactly one trampoline per valid bundle in `source`.
///
/// `source` is made absolute first so every `Contents` link has an absolute
/// target. Any filesystem failure aborts the sync and may leave `target`
/// partially populated; rerunning the whole sync is the recovery path.
pub fn sync(source: &Path, target: &Path) -> Result<SyncReport, SyncError> {
    let source = std::path::absolute(source).map_err(|e| io_err(source, e))?;

    // Step 1: clean slate.
    match fs::remove_dir_all(target) {
        Ok(()) => tracing::debug!("removed existing target: {}", target.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(target, e)),
    }
    fs::create_dir_all(target).map_err(|e| io_err(target, e))?;

    // Steps 2 + 3: discover and build.
    let bundles = discover(&source);
    tracing::debug!(
        "discovered {} bundle(s) in {}",
        bundles.len(),
        source.display()
    );

    let mut trampolines = Vec::with_capacity(bundles.len());
    for bundle in &bundles {
        trampolines.push(build_trampoline(bundle, target)?);
    }

    // Step 4: touch pass, strictly after every trampoline exists.
    let now = FileTime::now();
    for trampoline in &trampolines {
        set_file_times(trampoline, now, now).map_err(|e| io_err(trampoline, e))?;
    }

    tracing::info!(
        "synced {} trampoline(s) into {}",
        trampolines.len(),
        target.display()
    );
    Ok(SyncReport {
        target: target.to_path_buf(),
        trampolines,
    })
}
