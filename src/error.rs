//! Error types for mark
//!
//! Every failure a command can report maps to one variant here. The binary
//! prints the message to stderr and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mark
#[derive(Error, Debug)]
pub enum MarkError {
    /// A command received more or fewer arguments than it accepts
    #[error("invalid number of arguments for `{command}`")]
    InvalidArgCount { command: String },

    /// An index argument could not be parsed as an integer
    #[error("index is not a number: {value}")]
    IndexNotANumber { value: String },

    /// An index was negative or past the end of the mark list
    #[error("invalid index: {index}")]
    InvalidIndex { index: i64 },

    /// A path that cannot be stored as a single line
    #[error("cannot mark a path containing a line break: {path:?}")]
    UnstorablePath { path: String },

    /// The command line could not be parsed
    #[error("{message}")]
    Usage { message: String },

    /// File system operation errors
    #[error("{operation} failed on {}: {source}", .path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The user's home directory could not be determined
    #[error("could not determine home directory")]
    HomeDirNotFound,

    /// The current working directory could not be read
    #[error("could not read current directory: {source}")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    /// Writing command output failed
    #[error("failed to write output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl MarkError {
    /// Create a new argument count error
    pub fn invalid_arg_count(command: impl Into<String>) -> Self {
        Self::InvalidArgCount {
            command: command.into(),
        }
    }

    /// Create a new non-numeric index error
    pub fn index_not_a_number(value: impl Into<String>) -> Self {
        Self::IndexNotANumber {
            value: value.into(),
        }
    }

    /// Create a new out-of-range index error
    pub fn invalid_index<I: TryInto<i64>>(index: I) -> Self {
        Self::InvalidIndex {
            index: index.try_into().unwrap_or(i64::MAX),
        }
    }

    /// Create a new unstorable path error
    pub fn unstorable_path(path: impl Into<String>) -> Self {
        Self::UnstorablePath { path: path.into() }
    }

    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MarkError>;
