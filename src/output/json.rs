// src/output/json.rs
//! JSON report writer

use crate::output::ReportWriter;
use crate::types::ReportRow;
use std::io::Write;

/// JSON report: a single array of row objects
pub struct JsonReport;

impl ReportWriter for JsonReport {
    fn write_rows(&self, rows: &[ReportRow], out: &mut dyn Write) -> anyhow::Result<()> {
        serde_json::to_writer(&mut *out, rows)?;
        Ok(())
    }
}
