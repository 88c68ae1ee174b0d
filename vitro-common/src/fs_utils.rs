//! File output helpers used when generating the preview app.

use crate::error::{Result, VitroError};
use std::fs;
use std::path::Path;

/// Outcome of a conditional write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or overwritten
    Written,
    /// The file existed and was left alone
    Skipped,
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| VitroError::file_write(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| VitroError::file_write(path, e))
}

/// Write `contents` unless the file already exists and `overwrite` is false.
pub fn write_file_if(path: &Path, contents: &str, overwrite: bool) -> Result<WriteOutcome> {
    if path.exists() && !overwrite {
        tracing::trace!("keeping existing {}", path.display());
        return Ok(WriteOutcome::Skipped);
    }
    write_file(path, contents)?;
    Ok(WriteOutcome::Written)
}

/// Read a file to a string, reporting the path on failure.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| VitroError::file_read(path, e))
}
