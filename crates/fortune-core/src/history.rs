//! Append-only record of generated fortunes.

use serde::{Deserialize, Serialize};

use crate::fortune::Fortune;

/// Fortunes in generation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Fortune>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fortune.
    pub fn append(&mut self, fortune: Fortune) {
        self.entries.push(fortune);
    }

    /// All fortunes in insertion order.
    pub fn entries(&self) -> &[Fortune] {
        &self.entries
    }

    /// Snapshot sorted by timestamp, most recent first. Fortunes with equal
    /// timestamps keep their insertion order.
    pub fn newest_first(&self) -> Vec<Fortune> {
        let mut snapshot = self.entries.clone();
        snapshot.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        snapshot
    }

    /// The most recently appended fortune.
    pub fn last(&self) -> Option<&Fortune> {
        self.entries.last()
    }

    /// Remove every fortune, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Number of fortunes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fortunes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
