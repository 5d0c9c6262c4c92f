//! # mark
//!
//! Bookmark directories from the shell and jump back to them by index.
//!
//! Marks are kept most recent first in a plain text file (`~/.mark` by
//! default), one path per line. Every change rewrites the whole file.
//!
//! ## Example
//!
//! ```no_run
//! use mark::core::{LocalMarkStore, MarkStore};
//!
//! let mut store = LocalMarkStore::new("/tmp/marks");
//! store.add("/home/me/projects")?;
//! println!("Newest mark: {}", store.get(0)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr; stdout is reserved for command output that shell
/// functions capture.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
