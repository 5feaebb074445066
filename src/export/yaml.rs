//! YAML export of the dashboard summary

use std::io::Write;

use super::SummaryReport;
use crate::error::{JobdeskError, JobdeskResult};
use crate::models::DashboardData;

/// Write the summary as YAML with a short header comment
pub fn export_summary_yaml<W: Write>(data: &DashboardData, writer: &mut W) -> JobdeskResult<()> {
    let report = SummaryReport::from_data(data);

    writeln!(writer, "# jobdesk business health summary")
        .map_err(|e| JobdeskError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", report.generated_at)
        .map_err(|e| JobdeskError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &report).map_err(|e| JobdeskError::Export(e.to_string()))?;

    Ok(())
}
