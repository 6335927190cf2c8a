// src/input.rs
//! Loading of the domain list

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Read domains from a file (one per line), in file order.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. A domain
/// listed twice is only kept the first time.
pub fn load_domains(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read domain list {}", path.display()))?;
    Ok(parse_domains(&content))
}

pub fn parse_domains(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter(|l| {
            let first = seen.insert(l.to_string());
            if !first {
                warn!("Skipping duplicate domain {}", l);
            }
            first
        })
        .map(str::to_string)
        .collect()
}
