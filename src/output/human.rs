// src/output/human.rs
//! Per-entry summary lines on stdout

use crate::types::{Reachability, ReportRow};
use colored::Colorize;
use std::io::{self, Write};

/// Prints one `ParentUrl: .. Subdomain: .. Active: ..` line per row
pub struct SummaryPrinter {
    use_colors: bool,
}

impl SummaryPrinter {
    /// Colors are enabled when stdout is a terminal
    pub fn new() -> Self {
        Self {
            use_colors: is_terminal::is_terminal(io::stdout()),
        }
    }

    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    pub fn print_rows(&self, rows: &[ReportRow], out: &mut dyn Write) -> anyhow::Result<()> {
        for row in rows {
            if self.use_colors {
                let active = match row.active {
                    Reachability::Yes => row.active.as_str().green().bold(),
                    Reachability::No => row.active.as_str().red(),
                    Reachability::NotTested => row.active.as_str().dimmed(),
                };
                writeln!(
                    out,
                    "{} {} {} {} {} {}",
                    "ParentUrl:".dimmed(),
                    row.parent_url,
                    "Subdomain:".dimmed(),
                    row.url.cyan(),
                    "Active:".dimmed(),
                    active
                )?;
            } else {
                writeln!(out, "{}", row)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

impl Default for SummaryPrinter {
    fn default() -> Self {
        Self::new()
    }
}
