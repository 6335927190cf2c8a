// src/stats.rs
//! Run statistics for ct-recon

use std::time::{Duration, Instant};

use crate::types::Reachability;

/// Counters collected over one run
#[derive(Debug, Clone)]
pub struct RunStats {
    pub domains_queried: u64,
    pub entries_found: u64,
    pub entries_filtered: u64,
    pub hosts_reachable: u64,
    pub hosts_unreachable: u64,
    start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            domains_queried: 0,
            entries_found: 0,
            entries_filtered: 0,
            hosts_reachable: 0,
            hosts_unreachable: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_lookup(&mut self, entries: usize) {
        self.domains_queried += 1;
        self.entries_found += entries as u64;
    }

    pub fn record_filtered(&mut self, dropped: usize) {
        self.entries_filtered += dropped as u64;
    }

    pub fn record_probe(&mut self, status: Reachability) {
        match status {
            Reachability::Yes => self.hosts_reachable += 1,
            Reachability::No => self.hosts_unreachable += 1,
            Reachability::NotTested => {}
        }
    }

    /// Entries left after filtering
    pub fn entries_reported(&self) -> u64 {
        self.entries_found - self.entries_filtered
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Format statistics as a human-readable string
    pub fn format_stats(&self) -> String {
        let mut msg = format!(
            "{} domains queried | {} entries found | {} filtered | {} reported",
            self.domains_queried,
            self.entries_found,
            self.entries_filtered,
            self.entries_reported()
        );
        if self.hosts_reachable + self.hosts_unreachable > 0 {
            msg.push_str(&format!(
                " | {} reachable, {} unreachable",
                self.hosts_reachable, self.hosts_unreachable
            ));
        }
        msg.push_str(&format!(" | took {}", Self::format_duration(self.elapsed().as_secs())));
        msg
    }

    /// Format a duration in whole seconds
    pub fn format_duration(secs: u64) -> String {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
