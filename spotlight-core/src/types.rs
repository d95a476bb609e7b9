//! Domain types shared by the sync and dock crates.
//!
//! All path fields use `PathBuf`; derived paths are computed on demand and
//! never stored.

use std::path::{Path, PathBuf};

use crate::error::BundleError;

/// File-name suffix identifying an application bundle directory.
pub const BUNDLE_SUFFIX: &str = ".app";

/// Sub-directory of a bundle holding its payload; also the name of the
/// trampoline's only entry.
pub const CONTENTS_DIR: &str = "Contents";

/// Manifest file inside [`CONTENTS_DIR`] whose presence makes a bundle valid.
pub const MANIFEST_FILE: &str = "Info.plist";

/// Default managed package store; dock items outside it are never touched.
pub const STORE_PREFIX: &str = "/nix/store";

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// One installed application bundle, identified by its root directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the bundle (e.g. `/Applications/Foo.app`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Final path component (e.g. `Foo.app`).
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Bundle name without its extension (e.g. `Foo`) — the key dock items
    /// are matched on.
    pub fn stem(&self) -> String {
        self.root
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// `<root>/Contents`
    pub fn contents_path(&self) -> PathBuf {
        self.root.join(CONTENTS_DIR)
    }

    /// `<root>/Contents/Info.plist`
    pub fn manifest_path(&self) -> PathBuf {
        self.contents_path().join(MANIFEST_FILE)
    }

    /// Check the filesystem for the manifest. Evaluated fresh on every call.
    pub fn validate(&self) -> Result<(), BundleError> {
        let manifest = self.manifest_path();
        if manifest.exists() {
            Ok(())
        } else {
            Err(BundleError::MissingManifest { path: manifest })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ---------------------------------------------------------------------------
// Dock reconciliation outcome
// ---------------------------------------------------------------------------

/// Aggregate result of one dock reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockSyncResult {
    /// Dock items successfully repointed at a trampoline.
    pub updated: usize,
    /// Store-backed dock items with no matching trampoline.
    pub skipped: usize,
    /// One message per failed replace, or a single message for a failed listing.
    pub errors: Vec<String>,
}

impl DockSyncResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn make_bundle(root: &Path, name: &str) -> PathBuf {
        let path = root.join(name);
        fs::create_dir_all(path.join("Contents")).unwrap();
        fs::write(path.join("Contents").join("Info.plist"), "").unwrap();
        path
    }

    #[test]
    fn derived_paths() {
        let tmp = TempDir::new().unwrap();
        let root = make_bundle(tmp.path(), "Test.app");
        let bundle = Bundle::new(&root);

        assert_eq!(bundle.name(), "Test.app");
        assert_eq!(bundle.stem(), "Test");
        assert_eq!(bundle.contents_path(), root.join("Contents"));
        assert_eq!(
            bundle.manifest_path(),
            root.join("Contents").join("Info.plist")
        );
        assert!(bundle.is_valid());
    }

    #[test]
    fn stem_keeps_inner_dots() {
        let bundle = Bundle::new("/nix/store/abc-foo/Applications/Foo.Bar.app");
        assert_eq!(bundle.stem(), "Foo.Bar");
    }

    #[test]
    fn invalid_without_contents() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Invalid.app");
        fs::create_dir(&root).unwrap();

        let err = Bundle::new(&root).validate().unwrap_err();
        let BundleError::MissingManifest { path } = err;
        assert_eq!(path, root.join("Contents").join("Info.plist"));
    }

    #[test]
    fn invalid_without_manifest() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Invalid.app");
        fs::create_dir_all(root.join("Contents")).unwrap();

        assert!(!Bundle::new(&root).is_valid());
    }

    #[test]
    fn validity_is_not_cached() {
        let tmp = TempDir::new().unwrap();
        let root = make_bundle(tmp.path(), "Gone.app");
        let bundle = Bundle::new(&root);
        assert!(bundle.is_valid());

        fs::remove_file(bundle.manifest_path()).unwrap();
        assert!(!bundle.is_valid());
    }

    #[test]
    fn default_dock_result_is_zero() {
        let result = DockSyncResult::default();
        assert_eq!(result.updated, 0);
        assert_eq!(result.skipped, 0);
        assert!(result.is_clean());
    }
}
