// src/output/csv.rs
//! CSV report writer

use crate::output::ReportWriter;
use crate::types::ReportRow;
use std::io::Write;

/// CSV report with a fixed 7-column header
///
/// The header is written even when there are no rows.
pub struct CsvReport;

impl ReportWriter for CsvReport {
    fn write_rows(&self, rows: &[ReportRow], out: &mut dyn Write) -> anyhow::Result<()> {
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);

        writer.write_record(ReportRow::HEADER)?;
        for row in rows {
            writer.serialize(row)?;
        }

        writer.flush()?;
        Ok(())
    }
}
