//! End-to-end mirror rebuild behaviour against real temp directories.
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use spotlight_sync::{discover, sync};
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_app(dir: &Path, name: &str) -> PathBuf {
    let app = dir.join(name);
    fs::create_dir_all(app.join("Contents")).expect("mkdir Contents");
    fs::write(app.join("Contents").join("Info.plist"), "").expect("write Info.plist");
    app
}

#[test]
fn contents_links_resolve_to_source_bundles() {
    init_logging();
    let tmp = TempDir::new().expect("tmp");
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    let apps = [
        make_app(&source, "App1.app"),
        make_app(&source, "App2.app"),
        make_app(&source.join("KDE"), "Dolphin.app"),
    ];

    let report = sync(&source, &target).expect("sync");
    assert_eq!(report.len(), apps.len());

    for app in &apps {
        let name = app.file_name().expect("name");
        let link = target.join(name).join("Contents");
        assert!(
            fs::symlink_metadata(&link).expect("lstat").file_type().is_symlink(),
            "{} should be a symlink",
            link.display()
        );
        assert_eq!(
            fs::canonicalize(&link).expect("resolve link"),
            fs::canonicalize(app.join("Contents")).expect("resolve source"),
        );
    }
}

#[test]
fn nested_bundles_are_flattened_into_target_root() {
    init_logging();
    let tmp = TempDir::new().expect("tmp");
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    make_app(&source.join("Vendor"), "Tool.app");

    let report = sync(&source, &target).expect("sync");

    assert_eq!(report.trampolines, vec![target.join("Tool.app")]);
    assert!(!target.join("Vendor").exists());
}

#[test]
fn trampoline_holds_exactly_one_entry() {
    init_logging();
    let tmp = TempDir::new().expect("tmp");
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    let app = make_app(&source, "Foo.app");
    fs::write(app.join("README"), "extra files are not mirrored").expect("write");

    let report = sync(&source, &target).expect("sync");

    let entries: Vec<_> = fs::read_dir(&report.trampolines[0])
        .expect("read trampoline")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("Contents")]);
}

#[test]
fn removed_source_bundle_disappears_on_next_sync() {
    init_logging();
    let tmp = TempDir::new().expect("tmp");
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    make_app(&source, "Keep.app");
    let gone = make_app(&source, "Gone.app");

    sync(&source, &target).expect("first sync");
    assert!(target.join("Gone.app").exists());

    fs::remove_dir_all(gone).expect("remove source bundle");
    let report = sync(&source, &target).expect("second sync");

    assert_eq!(report.trampolines, vec![target.join("Keep.app")]);
    assert!(!target.join("Gone.app").exists());
}

#[test]
fn discovery_order_is_stable() {
    init_logging();
    let tmp = TempDir::new().expect("tmp");
    for name in ["Zed.app", "Alpha.app", "Mid.app"] {
        make_app(tmp.path(), name);
    }

    let names: Vec<_> = discover(tmp.path()).iter().map(|b| b.name()).collect();
    assert_eq!(names, vec!["Alpha.app", "Mid.app", "Zed.app"]);
}

#[test]
fn duplicate_names_build_twice_and_last_wins() {
    init_logging();
    let tmp = TempDir::new().expect("tmp");
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    make_app(&source, "Foo.app");
    let nested = make_app(&source.join("Vendor"), "Foo.app");

    let report = sync(&source, &target).expect("sync");

    assert_eq!(
        report.trampolines,
        vec![target.join("Foo.app"), target.join("Foo.app")]
    );
    assert_eq!(
        fs::read_link(target.join("Foo.app").join("Contents")).expect("read link"),
        nested.join("Contents")
    );
}
