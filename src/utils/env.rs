//! Environment lookups
//!
//! The only process state mark reads: the home directory (to locate the store)
//! and the current working directory.

use crate::error::{MarkError, Result};
use std::path::PathBuf;
use tracing::debug;

/// File name of the mark store inside the home directory
pub const MARK_FILE_NAME: &str = ".mark";

/// Resolve the user's home directory
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(MarkError::HomeDirNotFound)
}

/// Default location of the mark store: `~/.mark`
pub fn default_mark_file() -> Result<PathBuf> {
    let path = home_dir()?.join(MARK_FILE_NAME);
    debug!("Default mark file: {}", path.display());
    Ok(path)
}

/// Get the current working directory
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|source| MarkError::CurrentDir { source })
}
