//! The mark store
//!
//! An ordered list of bookmarked paths, most recent first, addressed by
//! zero-based position. The file-backed store rewrites the whole file on
//! every mutation; there is no locking between processes.

use crate::{
    error::{MarkError, Result},
    utils::fs::FileSystemUtils,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Operations every mark store supports
pub trait MarkStore {
    /// Path at `index`
    fn get(&self, index: usize) -> Result<String>;

    /// Put `path` at the front of the list. Does not de-duplicate.
    fn add(&mut self, path: &str) -> Result<()>;

    /// All paths, most recent first
    fn list(&self) -> Result<Vec<String>>;

    /// Remove every path
    fn clear(&mut self) -> Result<()>;

    /// Remove the path at `index`, keeping the others in order
    fn delete(&mut self, index: usize) -> Result<()>;
}

/// Reject paths that would not survive as a single line on disk
pub fn check_mark(path: &str) -> Result<()> {
    if path.contains(['\n', '\r']) {
        return Err(MarkError::unstorable_path(path));
    }
    Ok(())
}

/// Mark store persisted as one path per line in a local file
#[derive(Debug)]
pub struct LocalMarkStore {
    path: PathBuf,
    fs_utils: FileSystemUtils,
}

impl LocalMarkStore {
    /// Create a store backed by `path`. The file is not touched until first use.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, marks: &[String]) -> Result<()> {
        self.fs_utils
            .write_lines(&self.path, marks)
            .map_err(|e| MarkError::file_system("write", &self.path, e))
    }
}

impl MarkStore for LocalMarkStore {
    #[instrument(skip(self))]
    fn get(&self, index: usize) -> Result<String> {
        self.list()?
            .into_iter()
            .nth(index)
            .ok_or_else(|| MarkError::invalid_index(index))
    }

    #[instrument(skip(self))]
    fn add(&mut self, path: &str) -> Result<()> {
        check_mark(path)?;
        let mut marks = self.list()?;
        marks.insert(0, path.to_string());
        self.write_all(&marks)?;
        info!("Marked {}", path);
        Ok(())
    }

    #[instrument(skip(self))]
    fn list(&self) -> Result<Vec<String>> {
        self.fs_utils
            .read_lines(&self.path)
            .map_err(|e| MarkError::file_system("read", &self.path, e))
    }

    #[instrument(skip(self))]
    fn clear(&mut self) -> Result<()> {
        self.fs_utils
            .truncate(&self.path)
            .map_err(|e| MarkError::file_system("truncate", &self.path, e))?;
        debug!("Cleared {}", self.path.display());
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete(&mut self, index: usize) -> Result<()> {
        let mut marks = self.list()?;
        if index >= marks.len() {
            return Err(MarkError::invalid_index(index));
        }
        let removed = marks.remove(index);
        self.write_all(&marks)?;
        info!("Deleted {}", removed);
        Ok(())
    }
}

/// Mark store that lives only in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryMarkStore {
    marks: Vec<String>,
}

impl MemoryMarkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkStore for MemoryMarkStore {
    fn get(&self, index: usize) -> Result<String> {
        self.marks
            .get(index)
            .cloned()
            .ok_or_else(|| MarkError::invalid_index(index))
    }

    fn add(&mut self, path: &str) -> Result<()> {
        check_mark(path)?;
        self.marks.insert(0, path.to_string());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.marks.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.marks.clear();
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.marks.len() {
            return Err(MarkError::invalid_index(index));
        }
        self.marks.remove(index);
        Ok(())
    }
}
