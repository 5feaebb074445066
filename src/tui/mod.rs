//! Terminal User Interface module
//!
//! Hosts the business-health dashboard and the guided job tutorial. The
//! tutorial screen is a scrollable job form with the tour engine from
//! [`crate::tour`] running over it.

pub mod app;
pub mod event;
pub mod handler;
pub mod page;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
