//! Command-line argument parsing
//!
//! Positional arguments are collected as raw strings so that argument-count
//! and index errors are reported by the command handlers with exit status 1.
//! Parse failures never exit the process from inside clap: unknown tokens
//! become [`Command::Unknown`], `--help` becomes [`Command::Help`], and any
//! other usage error is returned as [`MarkError::Usage`].

use crate::error::{MarkError, Result};
use clap::{Parser, Subcommand, error::ErrorKind};
use std::{ffi::OsString, path::PathBuf};

/// mark - bookmark directories and jump back to them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "mark", disable_help_subcommand = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use this file instead of ~/.mark
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Subcommand to execute; `add` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add the current working directory to the mark list (default)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },

    /// Print the path at the given index
    Get {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "INDEX")]
        args: Vec<String>,
    },

    /// List all marked paths by index
    List {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },

    /// Delete the path at the given index
    Delete {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "INDEX")]
        args: Vec<String>,
    },

    /// Clear all marked paths
    Clear {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },

    /// Print the directory the given number of levels above the current one
    Back {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "INDEX")]
        args: Vec<String>,
    },

    /// Print shell functions for moving between marks
    Install {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },

    /// Display the help menu
    Help {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },

    /// Print the version
    #[command(hide = true)]
    Version {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },

    /// Anything else: reported and answered with the help menu
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Args {
    fn with_command(command: Command) -> Self {
        Self {
            debug: false,
            file: None,
            command: Some(command),
        }
    }

    /// The command to run, falling back to `add`
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Add { args: Vec::new() })
    }
}

/// Parse the process's command line arguments
pub fn parse_args() -> Result<Args> {
    parse_args_from(std::env::args_os())
}

/// Parse `argv`, where the first item is the program name
pub fn parse_args_from<I, T>(argv: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let err = match Args::try_parse_from(&argv) {
        Ok(args) => return Ok(args),
        Err(err) => err,
    };

    match err.kind() {
        ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand => {
            let tokens = argv
                .iter()
                .skip(1)
                .map(|token| token.to_string_lossy().into_owned())
                .collect();
            Ok(Args::with_command(Command::Unknown(tokens)))
        }
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Ok(Args::with_command(Command::Help { args: Vec::new() }))
        }
        ErrorKind::DisplayVersion => Ok(Args::with_command(Command::Version { args: Vec::new() })),
        _ => Err(MarkError::usage(err.to_string().trim_end())),
    }
}
