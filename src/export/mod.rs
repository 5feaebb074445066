//! Dashboard summary export
//!
//! Renders the dashboard figures for the `summary` command:
//! - Text: aligned plain-text report
//! - JSON / YAML: machine-readable report with computed totals and shares
//! - CSV: one row per bucket

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::display;
use crate::error::{JobdeskError, JobdeskResult};
use crate::models::{Breakdown, DashboardData, FollowUp, Money};

pub use self::csv::export_summary_csv;
pub use self::json::export_summary_json;
pub use self::yaml::export_summary_yaml;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Output formats for the `summary` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

/// One bucket with its computed share
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketSummary {
    pub name: String,
    pub count: u64,
    pub percent: u64,
    pub color: String,
    /// Whether the chart draws a label for this slice
    pub labelled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownSummary {
    pub title: String,
    pub total: u64,
    pub buckets: Vec<BucketSummary>,
}

impl From<&Breakdown> for BreakdownSummary {
    fn from(breakdown: &Breakdown) -> Self {
        Self {
            title: breakdown.title.clone(),
            total: breakdown.total(),
            buckets: breakdown
                .slices()
                .into_iter()
                .map(|slice| BucketSummary {
                    name: slice.bucket.name.clone(),
                    count: slice.bucket.count,
                    percent: slice.percent,
                    color: slice.bucket.color.to_string(),
                    labelled: slice.label.is_some(),
                })
                .collect(),
        }
    }
}

/// The full summary document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub breakdowns: Vec<BreakdownSummary>,
    pub total_revenue: Money,
    pub outstanding: Money,
    pub active_jobs: u32,
    pub follow_ups: Vec<FollowUp>,
}

impl SummaryReport {
    pub fn from_data(data: &DashboardData) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            breakdowns: data
                .breakdowns()
                .into_iter()
                .map(BreakdownSummary::from)
                .collect(),
            total_revenue: data.total_revenue,
            outstanding: data.outstanding,
            active_jobs: data.active_jobs,
            follow_ups: data.follow_ups.clone(),
        }
    }
}

/// Write the summary in the requested format
pub fn write_summary<W: Write>(
    data: &DashboardData,
    format: SummaryFormat,
    currency_symbol: &str,
    writer: &mut W,
) -> JobdeskResult<()> {
    match format {
        SummaryFormat::Text => {
            let text = display::dashboard::format_summary(data, currency_symbol);
            writer
                .write_all(text.as_bytes())
                .map_err(|e| JobdeskError::Export(e.to_string()))
        }
        SummaryFormat::Json => export_summary_json(data, writer),
        SummaryFormat::Yaml => export_summary_yaml(data, writer),
        SummaryFormat::Csv => export_summary_csv(data, writer),
    }
}
