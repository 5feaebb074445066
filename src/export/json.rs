//! JSON export of the dashboard summary

use std::io::Write;

use super::SummaryReport;
use crate::error::{JobdeskError, JobdeskResult};
use crate::models::DashboardData;

/// Write the summary as pretty-printed JSON
pub fn export_summary_json<W: Write>(data: &DashboardData, writer: &mut W) -> JobdeskResult<()> {
    let report = SummaryReport::from_data(data);
    serde_json::to_writer_pretty(&mut *writer, &report)
        .map_err(|e| JobdeskError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| JobdeskError::Export(e.to_string()))?;
    Ok(())
}
