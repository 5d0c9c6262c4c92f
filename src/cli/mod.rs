//! Command-line interface module
//!
//! Provides argument parsing and command execution.

pub mod args;
pub mod commands;
pub mod help;

pub use args::{Args, Command, parse_args, parse_args_from};
pub use commands::MarkCli;
