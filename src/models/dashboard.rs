//! Dashboard data
//!
//! The dashboard renders whatever `DashboardData` it is handed. The built-in
//! sample stands in for a real data source; a JSON file with the same shape
//! can be substituted without code changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::breakdown::{Breakdown, Bucket, Rgb};
use super::money::Money;
use crate::error::{JobdeskError, JobdeskResult};

/// Record types the dashboard can link to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Quotes,
    Jobs,
    Invoices,
}

impl Entity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quotes => "Quotes",
            Self::Jobs => "Jobs",
            Self::Invoices => "Invoices",
        }
    }
}

/// A suggested next action shown under the charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    pub title: String,
    pub detail: String,
}

impl FollowUp {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Everything the business-health dashboard displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub quotes: Breakdown,
    pub jobs: Breakdown,
    pub invoices: Breakdown,
    pub total_revenue: Money,
    pub outstanding: Money,
    pub active_jobs: u32,
    #[serde(default)]
    pub follow_ups: Vec<FollowUp>,
}

const AMBER: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
const GREEN: Rgb = Rgb::new(0x10, 0xb9, 0x81);
const RED: Rgb = Rgb::new(0xef, 0x44, 0x44);
const BLUE: Rgb = Rgb::new(0x3b, 0x82, 0xf6);
const PURPLE: Rgb = Rgb::new(0x8b, 0x5c, 0xf6);
const SLATE: Rgb = Rgb::new(0x94, 0xa3, 0xb8);

impl DashboardData {
    /// The fixed sample figures
    pub fn sample() -> Self {
        Self {
            quotes: Breakdown::new(
                "Quotes",
                vec![
                    Bucket::new("Outstanding", 8, AMBER),
                    Bucket::new("Accepted", 5, GREEN),
                    Bucket::new("Rejected", 2, RED),
                ],
            ),
            jobs: Breakdown::new(
                "Jobs",
                vec![
                    Bucket::new("Scheduled", 6, BLUE),
                    Bucket::new("In Progress", 4, PURPLE),
                    Bucket::new("Completed", 12, GREEN),
                    Bucket::new("On Hold", 1, SLATE),
                ],
            ),
            invoices: Breakdown::new(
                "Invoices",
                vec![
                    Bucket::new("Paid", 18, GREEN),
                    Bucket::new("Awaiting Payment", 7, AMBER),
                    Bucket::new("Overdue", 3, RED),
                ],
            ),
            total_revenue: Money::from_dollars(48_250),
            outstanding: Money::from_cents(1_248_050),
            active_jobs: 10,
            follow_ups: vec![
                FollowUp::new(
                    "Follow up on outstanding quotes",
                    "8 quotes are waiting on a customer decision",
                ),
                FollowUp::new(
                    "Chase overdue invoices",
                    "3 invoices are past their due date",
                ),
                FollowUp::new(
                    "Confirm next week's schedule",
                    "6 jobs are booked but not yet confirmed with the customer",
                ),
            ],
        }
    }

    /// Load dashboard data from a JSON file and validate it
    pub fn load(path: &Path) -> JobdeskResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            JobdeskError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let data: DashboardData = serde_json::from_str(&contents)?;
        data.validate()?;
        Ok(data)
    }

    /// Load from `path` when given, otherwise use the sample
    pub fn load_or_sample(path: Option<&Path>) -> JobdeskResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn validate(&self) -> JobdeskResult<()> {
        for breakdown in self.breakdowns() {
            breakdown.validate()?;
        }
        Ok(())
    }

    /// The three breakdowns in display order
    pub fn breakdowns(&self) -> [&Breakdown; 3] {
        [&self.quotes, &self.jobs, &self.invoices]
    }

    pub fn breakdown_for(&self, entity: Entity) -> &Breakdown {
        match entity {
            Entity::Quotes => &self.quotes,
            Entity::Jobs => &self.jobs,
            Entity::Invoices => &self.invoices,
        }
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_totals() {
        let data = DashboardData::sample();
        assert_eq!(data.quotes.total(), 15);
        assert_eq!(data.jobs.total(), 23);
        assert_eq!(data.invoices.total(), 28);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_breakdown_for() {
        let data = DashboardData::sample();
        assert_eq!(data.breakdown_for(Entity::Jobs).title, "Jobs");
        assert_eq!(data.breakdowns()[2].title, "Invoices");
    }

    #[test]
    fn test_load_roundtrip_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.json");

        let mut data = DashboardData::sample();
        data.active_jobs = 42;
        std::fs::write(&path, serde_json::to_string_pretty(&data).unwrap()).unwrap();

        let loaded = DashboardData::load(&path).unwrap();
        assert_eq!(loaded.active_jobs, 42);
        assert_eq!(loaded.quotes, data.quotes);
    }

    #[test]
    fn test_load_rejects_invalid_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.json");

        let mut data = DashboardData::sample();
        data.invoices.buckets[0].name = String::new();
        std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        let err = DashboardData::load(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_rejects_overflowing_counts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.json");

        let mut data = DashboardData::sample();
        data.jobs.buckets[0].count = u64::MAX;
        std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        let err = DashboardData::load(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DashboardData::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, JobdeskError::Io(_)));
    }

    #[test]
    fn test_load_or_sample_without_path() {
        assert_eq!(
            DashboardData::load_or_sample(None).unwrap(),
            DashboardData::sample()
        );
    }
}
