use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single dock tool invocation.
#[derive(Debug, Error)]
pub enum DockError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{operation}` failed ({status}): {stderr}")]
    Failed {
        operation: &'static str,
        status: String,
        stderr: String,
    },
}
