//! Display formatting for CLI output
//!
//! Plain-text renderings of the dashboard and the tutorial steps.

pub mod dashboard;
pub mod tour;

pub use dashboard::{format_breakdown, format_summary};
pub use tour::format_steps;
