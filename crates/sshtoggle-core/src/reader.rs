//! Line scanner for the agent configuration.
//!
//! The scanner makes a single forward pass. A line containing `[[ssh-keys]]`
//! opens a block; the header counts as the block's first line. The block
//! closes as a vault record once its first body line names `vault`, or as an
//! item record after two body lines. Fields are taken by position, not by key:
//! the item comes from the first body line and the vault from the last.
//!
//! A header is a line that starts with `[[ssh-keys]]` once leading `#` and
//! whitespace are removed, so a value mentioning the token stays a value.
//!
//! Field lines after a closed block still count towards its length. A block
//! reaching four lines, header included, is dropped; a vault block with one
//! trailing field (such as `account`) is kept. Other lines outside any block
//! are ignored and are lost on the next write back.
//!
//! # Selection
//!
//! A header that is not comment-prefixed marks position `records.len()` as
//! selected at the moment the header is seen. If that block is later dropped
//! the mark carries over to the next block that lands on the same position.
//! Marks left past the end of the document are pruned.

use std::{collections::BTreeSet, fmt, str::FromStr};

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    ConfigError, Record, SelectionStore,
    record::{COMMENT_PREFIX, HEADER},
};

const FIELD_SEPARATOR: &str = " = ";
const VAULT_KEY: &str = "vault";
/// Body lines at which a block stops matching either record shape.
const OVERFULL_BODY_LINES: usize = 3;

/// Handling of `[[ssh-keys]]` blocks that match neither record shape.
///
/// Every policy keeps the block out of the document; they differ only in how
/// loudly that happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedBlockPolicy {
    /// Drop the block without reporting it.
    #[default]
    Drop,
    /// Drop the block, log a warning and list it in [`Scan::malformed`].
    Warn,
    /// Abort the read with [`ConfigError::Malformed`].
    Error,
}

impl fmt::Display for MalformedBlockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Drop => "drop",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Unrecognized [`MalformedBlockPolicy`] name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown malformed block policy '{0}' (expected drop, warn or error)")]
pub struct UnknownPolicy(pub String);

impl FromStr for MalformedBlockPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(UnknownPolicy(s.to_owned())),
        }
    }
}

/// Reader configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderConfig {
    /// What to do with blocks matching neither record shape.
    pub on_malformed: MalformedBlockPolicy,
}

/// Why a block was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Header not followed by a complete body.
    Incomplete,
    /// Extra field lines after a complete body.
    Overfull,
    /// Body line without a `key = value` separator.
    MissingSeparator,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Incomplete => "header without a complete body",
            Self::Overfull => "unexpected field after a complete body",
            Self::MissingSeparator => "field line without ' = ' separator",
        };
        f.write_str(reason)
    }
}

/// A rejected block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedBlock {
    /// 1-based line number of the block header.
    pub line: usize,
    /// Why the block was rejected.
    pub reason: MalformedReason,
}

/// Result of scanning configuration text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Records in source order with their initial selection.
    pub store: SelectionStore,
    /// Blocks dropped under [`MalformedBlockPolicy::Warn`].
    pub malformed: Vec<MalformedBlock>,
}

/// Scan configuration text into records and an initial selection.
///
/// Empty input yields an empty store.
pub fn read(text: &str, config: &ReaderConfig) -> Result<Scan, ConfigError> {
    let mut scanner = Scanner::new(config.on_malformed);
    for (index, line) in text.lines().enumerate() {
        scanner.feed(index + 1, line)?;
    }
    scanner.finish()
}

#[derive(Debug, Default)]
enum BlockState {
    /// Outside any block.
    #[default]
    Idle,
    /// Header seen, body incomplete.
    Open { header_line: usize, body: Vec<String> },
    /// Body complete; committed at the next header or end of input.
    Closed { header_line: usize, record: Record, body_lines: usize },
}

struct Scanner {
    policy: MalformedBlockPolicy,
    records: Vec<Record>,
    selected: BTreeSet<usize>,
    malformed: Vec<MalformedBlock>,
    state: BlockState,
}

impl Scanner {
    fn new(policy: MalformedBlockPolicy) -> Self {
        Self {
            policy,
            records: Vec::new(),
            selected: BTreeSet::new(),
            malformed: Vec::new(),
            state: BlockState::Idle,
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<(), ConfigError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        if is_header(trimmed) {
            self.settle()?;
            if !trimmed.starts_with(COMMENT_PREFIX) {
                self.selected.insert(self.records.len());
            }
            self.state = BlockState::Open { header_line: line_no, body: Vec::new() };
            return Ok(());
        }

        self.state = match std::mem::take(&mut self.state) {
            BlockState::Idle => BlockState::Idle,
            BlockState::Closed { header_line, record, body_lines } if is_field(trimmed) => {
                BlockState::Closed { header_line, record, body_lines: body_lines + 1 }
            },
            closed @ BlockState::Closed { .. } => closed,
            BlockState::Open { header_line, mut body } => {
                body.push(trimmed.to_owned());
                let complete = match body.as_slice() {
                    [first] => names_vault(first),
                    _ => true,
                };
                if complete {
                    self.close(header_line, &body)?
                } else {
                    BlockState::Open { header_line, body }
                }
            },
        };
        Ok(())
    }

    /// Build the record for a complete body.
    fn close(&mut self, header_line: usize, body: &[String]) -> Result<BlockState, ConfigError> {
        let record = match body {
            [vault] => field_value(vault).map(Record::vault),
            [item, vault] => {
                field_value(item).zip(field_value(vault)).map(|(item, vault)| Record::item(item, vault))
            },
            _ => None,
        };

        match record {
            Some(record) => {
                Ok(BlockState::Closed { header_line, record, body_lines: body.len() })
            },
            None => {
                self.reject(header_line, MalformedReason::MissingSeparator)?;
                Ok(BlockState::Idle)
            },
        }
    }

    /// Commit or reject whatever block is pending.
    fn settle(&mut self) -> Result<(), ConfigError> {
        match std::mem::take(&mut self.state) {
            BlockState::Idle => Ok(()),
            BlockState::Open { header_line, .. } => {
                self.reject(header_line, MalformedReason::Incomplete)
            },
            BlockState::Closed { header_line, body_lines, .. }
                if body_lines >= OVERFULL_BODY_LINES =>
            {
                self.reject(header_line, MalformedReason::Overfull)
            },
            BlockState::Closed { record, .. } => {
                self.records.push(record);
                Ok(())
            },
        }
    }

    fn reject(&mut self, line: usize, reason: MalformedReason) -> Result<(), ConfigError> {
        let block = MalformedBlock { line, reason };
        match self.policy {
            MalformedBlockPolicy::Drop => {
                debug!(line, %reason, "dropping malformed ssh-keys block");
                Ok(())
            },
            MalformedBlockPolicy::Warn => {
                warn!(line, %reason, "dropping malformed ssh-keys block");
                self.malformed.push(block);
                Ok(())
            },
            MalformedBlockPolicy::Error => Err(ConfigError::Malformed(block)),
        }
    }

    fn finish(mut self) -> Result<Scan, ConfigError> {
        // Input ended one line into a block: keep it as a vault.
        match std::mem::take(&mut self.state) {
            BlockState::Open { header_line, body } if body.len() == 1 => {
                match body.first().and_then(|line| field_value(line)) {
                    Some(vault) => {
                        debug!(line = header_line, "flushing unterminated block as vault");
                        self.records.push(Record::vault(vault));
                    },
                    None => self.reject(header_line, MalformedReason::MissingSeparator)?,
                }
            },
            state => self.state = state,
        }
        self.settle()?;

        let store = SelectionStore::new(self.records, self.selected);
        Ok(Scan { store, malformed: self.malformed })
    }
}

/// Quoted value to the right of the first separator, quotes stripped.
fn field_value(line: &str) -> Option<String> {
    let (_, value) = line.split_once(FIELD_SEPARATOR)?;
    Some(unquote(value.trim()).to_owned())
}

fn unquote(value: &str) -> &str {
    value.strip_prefix('"').and_then(|v| v.strip_suffix('"')).unwrap_or(value)
}

/// Whether the key side of a body line mentions `vault`.
fn names_vault(line: &str) -> bool {
    let key = line.split_once(FIELD_SEPARATOR).map_or(line, |(key, _)| key);
    key.contains(VAULT_KEY)
}

/// Whether a trimmed line is an active or commented block header.
fn is_header(line: &str) -> bool {
    line.trim_start_matches(COMMENT_PREFIX).trim_start().starts_with(HEADER)
}

/// Whether a line outside a body looks like a `key = value` field.
fn is_field(line: &str) -> bool {
    line.trim_start_matches(COMMENT_PREFIX).contains(FIELD_SEPARATOR)
}
