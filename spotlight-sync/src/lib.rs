//! # spotlight-sync
//!
//! Bundle discovery and trampoline mirror rebuilding.
//!
//! Call [`sync`] to wipe a target directory and repopulate it with one
//! trampoline per valid bundle found in a source directory. [`discover`] and
//! [`build_trampoline`] expose the individual steps.

pub mod discovery;
pub mod error;
pub mod pipeline;
pub mod trampoline;

pub use discovery::discover;
pub use error::SyncError;
pub use pipeline::{sync, SyncReport};
pub use trampoline::build_trampoline;
