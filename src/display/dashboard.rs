//! Dashboard display formatting
//!
//! Plain-text rendering of the dashboard figures for terminal output.

use crate::models::{Breakdown, DashboardData};

/// Format the whole dashboard as a plain-text report
pub fn format_summary(data: &DashboardData, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Business Health\n");
    output.push_str("===============\n\n");

    output.push_str(&format!(
        "  Total revenue:  {}\n",
        data.total_revenue.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Outstanding:    {}\n",
        data.outstanding.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Active jobs:    {}\n\n", data.active_jobs));

    for breakdown in data.breakdowns() {
        output.push_str(&format_breakdown(breakdown));
        output.push('\n');
    }

    if !data.follow_ups.is_empty() {
        output.push_str("Suggested follow-ups\n");
        for follow_up in &data.follow_ups {
            output.push_str(&format!("  - {}: {}\n", follow_up.title, follow_up.detail));
        }
    }

    output
}

/// Format one breakdown as a table with a total row
pub fn format_breakdown(breakdown: &Breakdown) -> String {
    let name_width = breakdown
        .buckets
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!("{}\n", breakdown.title));

    for slice in breakdown.slices() {
        output.push_str(&format!(
            "  {:<width$}  {:>5}  {:>4}%\n",
            slice.bucket.name,
            slice.bucket.count,
            slice.percent,
            width = name_width
        ));
    }

    output.push_str(&format!(
        "  {:<width$}  {:>5}\n",
        "Total",
        breakdown.total(),
        width = name_width
    ));

    output
}
