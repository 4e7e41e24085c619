//! Subprocess execution
//!
//! Every task action that touches the toolchain goes through `sh`, which
//! blocks until the command exits and inherits the standard streams, so the
//! child's own output is what the user sees.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::types::{ChoresError, ChoresResult};

/// Run a single shell command via `sh -c`, inheriting stdio. A non-zero
/// exit turns into a fatal `Command` error carrying the command line and
/// exit code.
pub fn sh(cmd: &str) -> ChoresResult<()> {
    let status = Command::new("sh").arg("-c").arg(cmd).status()?;

    if !status.success() {
        return Err(ChoresError::Command {
            command: cmd.to_string(),
            code: status.code().unwrap_or(-1),
        });
    }

    Ok(())
}

/// Recursively remove a directory. A missing path is a success, so clean
/// tasks stay idempotent.
pub fn rm_rf(path: impl AsRef<Path>) -> ChoresResult<()> {
    match fs::remove_dir_all(path.as_ref()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ChoresError::Io(e)),
    }
}
