//! Ordered records with their selection state.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{Record, SelectionError};

/// Records in document order and the positions that are enabled.
///
/// Selection is keyed by position. Records are never reordered or edited, so
/// positions stay valid for the lifetime of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    records: Vec<Record>,
    selected: BTreeSet<usize>,
}

impl SelectionStore {
    /// Create a store. Positions past the end of `records` are discarded.
    pub fn new(records: Vec<Record>, selected: impl IntoIterator<Item = usize>) -> Self {
        let len = records.len();
        let selected = selected.into_iter().filter(|&position| position < len).collect();
        Self { records, selected }
    }

    /// Flip the selection of `position`. Returns the new state.
    pub fn toggle(&mut self, position: usize) -> Result<bool, SelectionError> {
        if position >= self.records.len() {
            return Err(SelectionError::OutOfRange { position, len: self.records.len() });
        }

        let selected = if self.selected.remove(&position) {
            false
        } else {
            self.selected.insert(position);
            true
        };
        debug!(position, selected, "toggled ssh key entry");
        Ok(selected)
    }

    /// Whether `position` is enabled. False for out of range positions.
    pub fn is_selected(&self, position: usize) -> bool {
        self.selected.contains(&position)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `position`.
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// All records in document order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Enabled positions in ascending order.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Position, record and selection state for every record.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Record, bool)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(position, record)| (position, record, self.is_selected(position)))
    }

    /// Display labels in document order.
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(Record::label).collect()
    }
}
