//! Utility functions for error handling
//!
//! File helpers that attach the path and purpose to IO failures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AssistError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(io_error(
            io::ErrorKind::NotFound,
            format!("File not found: {} (needed for {purpose})", path.display()),
        ));
    }

    if !path.is_file() {
        return Err(io_error(
            io::ErrorKind::InvalidInput,
            format!("Path is not a file: {} (expected for {purpose})", path.display()),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
            _ => "Failed to open file",
        };
        io_error(e.kind(), format!("{context}: {} ({e})", path.display()))
    })
}

/// Path of the temporary sibling used while an artifact is being written
#[must_use]
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

/// Write a file through a staging sibling and rename it into place
///
/// The writer closure receives the staging file. If it fails the staging file
/// is removed and nothing appears at `path`.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(fs::File) -> Result<()>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let staging = staging_path(path);
    let file = fs::File::create(&staging)?;

    if let Err(e) = write(file) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        AssistError::Io(e)
    })
}

fn io_error(kind: io::ErrorKind, message: String) -> AssistError {
    AssistError::Io(io::Error::new(kind, message))
}
