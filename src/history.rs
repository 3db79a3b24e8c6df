// src/history.rs

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{OmikujiError, OmikujiResult};

/// One recorded draw result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub label: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub occurred_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self::at(label, Utc::now())
    }

    pub fn at(label: impl Into<String>, occurred_at: DateTime<Utc>) -> Self {
        HistoryEntry {
            label: label.into(),
            // second precision, matching the persisted representation
            occurred_at: occurred_at.trunc_subsecs(0),
        }
    }
}

/// Bounded record of past draws, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> OmikujiResult<Self> {
        if capacity == 0 {
            return Err(OmikujiError::ZeroCapacity);
        }
        Ok(HistoryLog {
            capacity,
            entries: Vec::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Prepends an entry. Once over capacity the oldest entry is the one
    /// dropped, always.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    /// Replaces the contents with a loaded sequence, truncating in case the
    /// capacity shrank since the sequence was persisted.
    pub fn replace(&mut self, mut entries: Vec<HistoryEntry>) {
        entries.truncate(self.capacity);
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
