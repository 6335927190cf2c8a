// src/progress.rs
//! Progress indicator using indicatif

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar for the lookup and probe stages
///
/// Draws to stderr, so stdout only carries summary lines.
pub struct ProgressIndicator {
    bar: Option<ProgressBar>,
}

impl ProgressIndicator {
    /// Create a new progress indicator; disabled when stderr is not a terminal
    pub fn new(enabled: bool) -> Self {
        if !enabled || !is_terminal::is_terminal(std::io::stderr()) {
            return Self::disabled();
        }

        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

        let bar = ProgressBar::new(0);
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    pub fn disabled() -> Self {
        Self { bar: None }
    }

    /// Begin a stage of `len` steps
    pub fn start_stage(&self, prefix: &'static str, len: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_prefix(prefix);
            bar.set_length(len as u64);
            bar.set_position(0);
        }
    }

    /// Show the item being worked on
    pub fn set_message(&self, msg: impl Into<String>) {
        if let Some(ref bar) = self.bar {
            bar.set_message(msg.into());
        }
    }

    /// Mark one step of the current stage done
    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Temporarily suspend the bar to print other output
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if let Some(ref bar) = self.bar {
            bar.suspend(f)
        } else {
            f()
        }
    }

    /// Finish and clear the progress indicator
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        self.finish();
    }
}
