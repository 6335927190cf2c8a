// src/output/mod.rs
//! Report writing for ct-recon
//!
//! The report is a flat list of `ReportRow`s written once, at the end of a
//! run, to a fixed file name in the output directory.

use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::cli::OutputFormat;
use crate::types::ReportRow;

pub mod csv;
pub mod human;
pub mod json;

/// Trait for serializers of the final report
pub trait ReportWriter {
    /// Serialize every row to `out`
    fn write_rows(&self, rows: &[ReportRow], out: &mut dyn Write) -> anyhow::Result<()>;
}

/// Select the writer for an output format
pub fn writer_for(format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Csv => Box::new(csv::CsvReport),
        OutputFormat::Json => Box::new(json::JsonReport),
    }
}

/// Write the report to `path`, replacing any existing file
pub fn write_report(rows: &[ReportRow], format: OutputFormat, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writer_for(format).write_rows(rows, &mut out)?;
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_rows() -> Vec<ReportRow> {
    use crate::types::Reachability;

    vec![
        ReportRow {
            parent_url: "example.com".to_string(),
            url: "api.example.com".to_string(),
            active: Reachability::Yes,
            logged_at: "2023-05-01".to_string(),
            not_before: "2023-04-30".to_string(),
            logged_at_epoch: 1682899200,
            not_before_epoch: 1682812800,
        },
        ReportRow {
            parent_url: "example.com".to_string(),
            url: "*.example.com".to_string(),
            active: Reachability::NotTested,
            logged_at: "bad".to_string(),
            not_before: "2023-01-01".to_string(),
            logged_at_epoch: 0,
            not_before_epoch: 1672531200,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "stale contents that are much longer than the report\n".repeat(50)).unwrap();

        write_report(&sample_rows(), OutputFormat::Csv, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("ParentUrl,"));
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_write_report_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");

        write_report(&sample_rows(), OutputFormat::Json, &path).unwrap();

        let rows: Vec<ReportRow> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows, sample_rows());
    }

    #[test]
    fn test_write_report_missing_directory() {
        let path = Path::new("/nonexistent/dir/results.csv");
        assert!(write_report(&[], OutputFormat::Csv, path).is_err());
    }
}
