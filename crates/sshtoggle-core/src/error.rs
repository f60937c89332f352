//! Error types for agent configuration handling.
//!
//! Read and write failures carry the path they happened on so the caller can
//! surface a useful message. Malformed blocks only become errors when the
//! reader is configured with [`crate::MalformedBlockPolicy::Error`].

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::MalformedBlock;

/// Errors raised while loading or persisting the agent configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file could not be created, written or flushed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A `[[ssh-keys]]` block matched neither record shape.
    #[error("malformed [[ssh-keys]] block at line {}: {}", .0.line, .0.reason)]
    Malformed(MalformedBlock),
}

impl ConfigError {
    /// Returns true if the error came from reading the file.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }
}

/// Errors raised by [`crate::SelectionStore`] mutations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Position does not refer to a record.
    #[error("position {position} out of range for {len} records")]
    OutOfRange {
        /// Requested position.
        position: usize,
        /// Number of records in the store.
        len: usize,
    },
}
