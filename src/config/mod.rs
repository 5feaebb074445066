//! Configuration module for jobdesk
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence
//! - Guided tour timings

pub mod paths;
pub mod settings;

pub use paths::JobdeskPaths;
pub use settings::{Settings, TourSettings};
