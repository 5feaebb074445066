//! CSV export of the dashboard breakdowns, one row per bucket

use std::io::Write;

use crate::error::{JobdeskError, JobdeskResult};
use crate::models::DashboardData;

pub fn export_summary_csv<W: Write>(data: &DashboardData, writer: &mut W) -> JobdeskResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Breakdown", "Bucket", "Count", "Percent", "Color"])
        .map_err(|e| JobdeskError::Export(e.to_string()))?;

    for breakdown in data.breakdowns() {
        for slice in breakdown.slices() {
            let count = slice.bucket.count.to_string();
            let percent = slice.percent.to_string();
            let color = slice.bucket.color.to_string();
            csv_writer
                .write_record([
                    breakdown.title.as_str(),
                    slice.bucket.name.as_str(),
                    count.as_str(),
                    percent.as_str(),
                    color.as_str(),
                ])
                .map_err(|e| JobdeskError::Export(e.to_string()))?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| JobdeskError::Export(e.to_string()))?;
    Ok(())
}
