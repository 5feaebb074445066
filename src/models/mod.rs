//! Core data models for jobdesk
//!
//! Money amounts, the proportional breakdowns shown on the dashboard, the
//! dashboard data set itself and the sample job used by the tutorial.

pub mod breakdown;
pub mod dashboard;
pub mod job;
pub mod money;

pub use breakdown::{Breakdown, Bucket, Rgb, Slice, MIN_LABEL_PERCENT};
pub use dashboard::{DashboardData, Entity, FollowUp};
pub use job::SampleJobForm;
pub use money::Money;
