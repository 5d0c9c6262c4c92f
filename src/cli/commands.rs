//! Command implementations for the CLI

use crate::{
    cli::{
        Command,
        help::{HELP_TEXT, INSTALL_TEXT},
    },
    core::{
        navigate::ancestor,
        store::{MarkStore, check_mark},
    },
    error::{MarkError, Result},
    utils::env,
};
use std::{io::Write, path::PathBuf};
use tracing::{debug, info, instrument};

/// Runs commands against a mark store, writing results to `out` and
/// diagnostics that are not errors to `err`
pub struct MarkCli<S, O, E> {
    store: S,
    out: O,
    err: E,
    cwd: Option<PathBuf>,
}

impl<S: MarkStore, O: Write, E: Write> MarkCli<S, O, E> {
    /// Create a CLI over `store`. The working directory is read from the
    /// process when a command needs it.
    pub fn new(store: S, out: O, err: E) -> Self {
        Self {
            store,
            out,
            err,
            cwd: None,
        }
    }

    /// Use `cwd` instead of the process working directory
    #[must_use]
    pub fn with_cwd<P: Into<PathBuf>>(mut self, cwd: P) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the CLI, returning the store and both output streams
    pub fn into_parts(self) -> (S, O, E) {
        (self.store, self.out, self.err)
    }

    /// Execute the appropriate handler for `command`
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Add { args } => self.add(args),
            Command::Get { args } => self.get(args),
            Command::List { args } => self.list(args),
            Command::Delete { args } => self.delete(args),
            Command::Clear { .. } => self.clear(),
            Command::Back { args } => self.back(args),
            Command::Install { .. } => self.install(),
            Command::Help { .. } => self.help(),
            Command::Version { .. } => self.version(),
            Command::Unknown(tokens) => {
                debug!("Unknown command: {:?}", tokens.first());
                writeln!(self.err, "invalid option. displaying help.")?;
                self.help()
            }
        }
    }

    fn current_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => env::current_dir(),
        }
    }

    /// Mark the working directory, moving it to the front if already marked
    fn add(&mut self, args: &[String]) -> Result<()> {
        expect_no_args("add", args)?;
        let cwd = self.current_dir()?;
        let path = cwd.to_string_lossy().into_owned();
        check_mark(&path)?;

        let marks = self.store.list()?;
        if !marks.contains(&path) {
            return self.store.add(&path);
        }

        writeln!(self.out, "path already exists. Moving to top.")?;
        info!("Moving {} to the front", path);

        // rebuild back to front so every other mark keeps its position
        self.store.clear()?;
        for mark in marks.iter().rev().filter(|mark| **mark != path) {
            self.store.add(mark)?;
        }
        self.store.add(&path)
    }

    fn get(&mut self, args: &[String]) -> Result<()> {
        let index = match args {
            [] => 0,
            [raw] => to_position(parse_index(raw)?)?,
            _ => return Err(MarkError::invalid_arg_count("get")),
        };
        let path = self.store.get(index)?;
        writeln!(self.out, "{}", path)?;
        Ok(())
    }

    fn list(&mut self, args: &[String]) -> Result<()> {
        expect_no_args("list", args)?;
        let marks = self.store.list()?;
        debug!("Listing {} marks", marks.len());
        for (index, path) in marks.iter().enumerate() {
            writeln!(self.out, "[{}] {}", index, path)?;
        }
        Ok(())
    }

    fn delete(&mut self, args: &[String]) -> Result<()> {
        let raw = single_arg("delete", args)?;
        let index = to_position(parse_index(raw)?)?;
        self.store.delete(index)
    }

    fn clear(&mut self) -> Result<()> {
        self.store.clear()?;
        info!("Cleared all marks");
        Ok(())
    }

    fn back(&mut self, args: &[String]) -> Result<()> {
        let raw = single_arg("back", args)?;
        let levels = parse_index(raw)?;
        let cwd = self.current_dir()?;
        let path = ancestor(&cwd, levels)?;
        writeln!(self.out, "{}", path.display())?;
        Ok(())
    }

    fn install(&mut self) -> Result<()> {
        write!(self.out, "{}", INSTALL_TEXT)?;
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.out, "{}", HELP_TEXT)?;
        Ok(())
    }

    fn version(&mut self) -> Result<()> {
        writeln!(self.out, "mark {}", env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }
}

fn expect_no_args(command: &str, args: &[String]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(MarkError::invalid_arg_count(command))
    }
}

fn single_arg<'a>(command: &str, args: &'a [String]) -> Result<&'a str> {
    match args {
        [raw] => Ok(raw.as_str()),
        _ => Err(MarkError::invalid_arg_count(command)),
    }
}

/// Parse an index argument, allowing negative values through
fn parse_index(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| MarkError::index_not_a_number(raw))
}

/// Convert a parsed index to a list position, rejecting negatives
fn to_position(index: i64) -> Result<usize> {
    usize::try_from(index).map_err(|_| MarkError::invalid_index(index))
}
