//! Core model for toggling 1Password SSH agent keys.
//!
//! The agent configuration is a narrow, line-oriented subset of TOML made of
//! `[[ssh-keys]]` blocks. A block whose lines are prefixed with `#` is
//! disabled. This crate turns that text into an ordered list of records plus a
//! selection set, and turns the pair back into text.
//!
//! # Components
//!
//! - [`Record`]: a vault or an item-in-vault entry and its block encodings
//! - [`read`]: scans raw text into a [`Scan`] (records plus selection)
//! - [`SelectionStore`]: the ordered records and which of them are enabled
//! - [`serialize`]: regenerates the full file text from a store
//! - [`read_config`] / [`write_config`]: scoped file access around the above

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod file;
pub mod reader;
pub mod record;
mod store;
mod writer;

pub use error::{ConfigError, SelectionError};
pub use file::{read_config, save, write_config};
pub use reader::{MalformedBlock, MalformedBlockPolicy, MalformedReason, ReaderConfig, Scan, read};
pub use record::Record;
pub use store::SelectionStore;
pub use writer::serialize;
