//! Trampoline construction.
//!
//! A trampoline is a directory named after the source bundle whose only
//! entry, `Contents`, is a symlink to the real bundle's `Contents`:
//!
//! ```text
//! <target>/Foo.app/
//!   Contents -> /nix/store/…-foo/Applications/Foo.app/Contents
//! ```
//!
//! Building is idempotent: an existing `Contents` entry of any kind is
//! removed before the link is (re)created.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use spotlight_core::{Bundle, CONTENTS_DIR};

use crate::error::{io_err, SyncError};

/// Create or replace the trampoline for `bundle` inside `target_root`.
///
/// Bundle validity is not re-checked. Returns the trampoline directory.
pub fn build_trampoline(bundle: &Bundle, target_root: &Path) -> Result<PathBuf, SyncError> {
    let trampoline = target_root.join(bundle.name());
    fs::create_dir_all(&trampoline).map_err(|e| io_err(&trampoline, e))?;

    let link = trampoline.join(CONTENTS_DIR);
    remove_existing(&link)?;

    let contents = bundle.contents_path();
    symlink_dir(&contents, &link).map_err(|e| io_err(&link, e))?;

    tracing::info!("linked: {} -> {}", link.display(), contents.display());
    Ok(trampoline)
}

/// Remove whatever sits at `path` without following symlinks. Absent is fine.
fn remove_existing(path: &Path) -> Result<(), SyncError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(io_err(path, e)),
    };

    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_err(path, e)),
    }
}

#[cfg(unix)]
fn symlink_dir(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink_dir(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(original, link)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
