//! File system utility functions
//!
//! Line-oriented reads and whole-file rewrites for small text files, with
//! owner-only permissions on files this module creates.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Permission bits for files created by mark
pub const DEFAULT_FILE_MODE: u32 = 0o600;

/// Utility struct for file system operations
#[derive(Debug, Clone, Copy)]
pub struct FileSystemUtils {
    file_mode: u32,
}

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub const fn new() -> Self {
        Self::with_mode(DEFAULT_FILE_MODE)
    }

    /// Create an instance that creates files with the given Unix mode
    pub const fn with_mode(file_mode: u32) -> Self {
        Self { file_mode }
    }

    fn options(&self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        opts.create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(self.file_mode);
        }
        #[cfg(not(unix))]
        let _ = self.file_mode;
        opts
    }

    /// Open a file for reading, creating it (and its parent directory) if absent
    #[instrument(skip(self))]
    pub fn open_or_create<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<File> {
        let path = path.as_ref();
        self.ensure_parent(path)?;
        // `create` is only honoured together with write or append access
        self.options().read(true).append(true).open(path)
    }

    /// Read every non-blank line of a file, creating the file if absent
    #[instrument(skip(self))]
    pub fn read_lines<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<Vec<String>> {
        let path = path.as_ref();
        debug!("Reading lines from: {}", path.display());

        let reader = BufReader::new(self.open_or_create(path)?);
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.is_empty() {
                lines.push(line);
            }
        }

        debug!("Read {} lines", lines.len());
        Ok(lines)
    }

    /// Replace the whole contents of a file with one entry per line
    #[instrument(skip(self, lines))]
    pub fn write_lines<P, S>(&self, path: P, lines: &[S]) -> io::Result<()>
    where
        P: AsRef<Path> + std::fmt::Debug,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        debug!("Rewriting {} with {} lines", path.display(), lines.len());

        self.ensure_parent(path)?;
        let file = self.options().write(true).truncate(true).open(path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line.as_ref())?;
        }
        writer.flush()?;
        writer.get_ref().sync_all()
    }

    /// Truncate a file to zero length, creating it if absent
    #[instrument(skip(self))]
    pub fn truncate<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Truncating: {}", path.display());

        self.ensure_parent(path)?;
        self.options().write(true).truncate(true).open(path)?;
        Ok(())
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                debug!("Creating directory: {}", parent.display());
                fs::create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
