//! The dock tool interface and its `dockutil` process implementation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::DockError;

/// Executable name searched on `PATH` when no override is given.
pub const DOCKUTIL: &str = "dockutil";

/// Operations the reconciler needs from the dock.
pub trait DockTool {
    /// Raw listing of pinned items: one `name\tpath` record per line.
    fn list(&self) -> Result<String, DockError>;

    /// Replace the pinned item called `display_name` with `new_path`.
    fn replace(&self, new_path: &Path, display_name: &str) -> Result<(), DockError>;
}

/// [`DockTool`] backed by the `dockutil` command-line program.
///
/// Invocations are synchronous and have no timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dockutil {
    program: PathBuf,
}

impl Dockutil {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the executable: an explicit override is used as given,
    /// otherwise `dockutil` is looked up on `PATH`.
    pub fn locate(override_path: Option<&Path>) -> Option<Self> {
        if let Some(path) = override_path {
            return Some(Self::new(path));
        }
        let path_var = std::env::var_os("PATH")?;
        find_in_path(DOCKUTIL, &path_var).map(Self::new)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, operation: &'static str, args: &[&OsStr]) -> Result<Output, DockError> {
        tracing::debug!("running {} {:?}", self.program.display(), args);
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| DockError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(output);
        }

        Err(DockError::Failed {
            operation,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

impl DockTool for Dockutil {
    fn list(&self) -> Result<String, DockError> {
        let output = self.run("dockutil -L", &[OsStr::new("-L")])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn replace(&self, new_path: &Path, display_name: &str) -> Result<(), DockError> {
        self.run(
            "dockutil --add",
            &[
                OsStr::new("--add"),
                new_path.as_os_str(),
                OsStr::new("--replacing"),
                OsStr::new(display_name),
            ],
        )?;
        Ok(())
    }
}

/// Search a `PATH`-style list for an executable regular file called `name`.
pub fn find_in_path(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
