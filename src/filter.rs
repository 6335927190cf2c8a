// src/filter.rs
//! Minimum log-time filtering of discovered entries

use crate::types::{DomainEntry, DomainResults};

/// Keeps entries logged strictly after a threshold epoch
///
/// A threshold of 0 disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinTimeFilter {
    threshold: i64,
}

impl MinTimeFilter {
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    pub fn is_enabled(&self) -> bool {
        self.threshold != 0
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Check if an entry survives the filter
    pub fn should_keep(&self, entry: &DomainEntry) -> bool {
        !self.is_enabled() || entry.logged_at_epoch > self.threshold
    }

    /// Filter one domain's entries in place, returning how many were dropped
    pub fn apply(&self, entries: &mut Vec<DomainEntry>) -> usize {
        let before = entries.len();
        entries.retain(|e| self.should_keep(e));
        before - entries.len()
    }

    /// Filter every domain's entries, returning the total dropped
    pub fn apply_all(&self, results: &mut [DomainResults]) -> usize {
        if !self.is_enabled() {
            return 0;
        }
        results.iter_mut().map(|r| self.apply(&mut r.entries)).sum()
    }
}
