//! Core functionality for mark
//!
//! Contains the persisted mark store and the ancestor computation used by
//! `mark back`.

pub mod navigate;
pub mod store;

pub use navigate::ancestor;
pub use store::{LocalMarkStore, MarkStore, MemoryMarkStore, check_mark};
