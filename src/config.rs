//! Configuration for a single mark invocation

use crate::{
    cli::Args,
    error::{MarkError, Result},
    utils::env,
};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// File holding the mark list
    pub mark_file: PathBuf,
}

impl Config {
    /// Create configuration from command line arguments
    ///
    /// The mark file comes from `--file` when given, otherwise `~/.mark`.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mark_file = match &args.file {
            Some(path) => path.clone(),
            None => env::default_mark_file()?,
        };

        let config = Self {
            debug: args.debug,
            mark_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.mark_file.as_os_str().is_empty() {
            return Err(MarkError::config("mark file path is empty"));
        }

        if self.mark_file.is_dir() {
            return Err(MarkError::config(format!(
                "mark file is a directory: {}",
                self.mark_file.display()
            )));
        }

        Ok(())
    }
}
