//! # spotlight-dock
//!
//! Repoints pinned dock items that live in the package store at freshly
//! built trampolines.
//!
//! The dock is driven through the narrow [`DockTool`] interface (`list` and
//! `replace`); [`Dockutil`] implements it by running the `dockutil`
//! executable. [`reconcile`] holds the matching algorithm and is usable with
//! any tool implementation.

mod error;
pub mod listing;
pub mod reconcile;
pub mod tool;

pub use error::DockError;
pub use listing::{parse_listing, DockItem};
pub use reconcile::{reconcile, sync_dock};
pub use tool::{find_in_path, DockTool, Dockutil, DOCKUTIL};
