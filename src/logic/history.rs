//! Bounded conversion history for the current session.

use std::collections::VecDeque;

use crate::state::types::HistoryEntry;

/// Maximum number of conversions kept in the session history.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Append-ordered log of conversions capped at a fixed length.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionHistory {
    /// Entries in append order (oldest first).
    entries: VecDeque<HistoryEntry>,
    /// Maximum retained entries.
    capacity: usize,
}

impl Default for ConversionHistory {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY_ENTRIES)
    }
}

impl ConversionHistory {
    /// Create an empty history keeping at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// What: Append an entry and drop the oldest ones beyond capacity.
    ///
    /// Inputs:
    /// - `entry`: Conversion to record.
    ///
    /// Output:
    /// - Number of entries evicted (0 while below capacity).
    ///
    /// Details:
    /// - Order is call order, not timestamp order.
    pub fn record(&mut self, entry: HistoryEntry) -> usize {
        self.entries.push_back(entry);
        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in append order (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// What: Project the history newest-first without touching stored order.
    ///
    /// Output:
    /// - References sorted by timestamp descending.
    ///
    /// Details:
    /// - Entries sharing a timestamp appear most recently appended first.
    #[must_use]
    pub fn sorted_by_timestamp_desc(&self) -> Vec<&HistoryEntry> {
        let mut out: Vec<&HistoryEntry> = self.entries.iter().rev().collect();
        out.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        out
    }
}
