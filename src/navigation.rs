//! Navigation requests
//!
//! Screens never switch themselves. They hand one of these back to the app,
//! which decides where to go next.

use crate::models::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// The hosted job form was saved
    SaveSuccess,
    /// The hosted job form was cancelled
    Cancel,
    /// The user skipped out of the guided tour
    ExitTutorial,
    /// Open the list of records behind a dashboard chart
    NavigateTo(Entity),
}
