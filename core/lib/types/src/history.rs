use std::slice;

use thiserror::Error;

use crate::{ResolvedRecord, VersionId};

/// Addresses of one historical deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub version: VersionId,
    pub addresses: ResolvedRecord,
}

impl VersionEntry {
    pub fn new(version: VersionId, addresses: ResolvedRecord) -> Self {
        Self { version, addresses }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum HistoryError {
    #[error("History is not contiguous: expected version {expected}, got version {actual}")]
    NotContiguous {
        expected: VersionId,
        actual: VersionId,
    },
}

/// Historical deployments ordered from the oldest (version 1) to the newest.
///
/// The history always starts at version 1 and never skips a version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionedHistory {
    entries: Vec<VersionEntry>,
}

impl VersionedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from entries given in ascending order.
    pub fn from_entries(
        entries: impl IntoIterator<Item = VersionEntry>,
    ) -> Result<Self, HistoryError> {
        let mut history = Self::new();
        for entry in entries {
            history.push(entry)?;
        }
        Ok(history)
    }

    /// Version the next pushed entry must have, `None` if the version space is exhausted.
    pub fn next_version(&self) -> Option<VersionId> {
        match self.entries.last() {
            Some(entry) => entry.version.next(),
            None => Some(VersionId::FIRST),
        }
    }

    /// Appends the entry of the version right after the newest one.
    pub fn push(&mut self, entry: VersionEntry) -> Result<(), HistoryError> {
        match self.next_version() {
            Some(expected) if expected == entry.version => {
                self.entries.push(entry);
                Ok(())
            }
            expected => Err(HistoryError::NotContiguous {
                expected: expected.unwrap_or(entry.version),
                actual: entry.version,
            }),
        }
    }

    /// The most recent historical deployment.
    pub fn latest(&self) -> Option<&VersionEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, VersionEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a VersionedHistory {
    type Item = &'a VersionEntry;
    type IntoIter = slice::Iter<'a, VersionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
