//! Dialog modules for the TUI

pub mod help;
pub mod tour_intro;
pub mod tour_step;
