//! Utility modules for common functionality
//!
//! Provides file helpers for the store and environment lookups.

pub mod env;
pub mod fs;

pub use fs::FileSystemUtils;
