//! jobdesk - business-health dashboard and guided job tutorial for the terminal
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and persisted settings
//! - `error`: Custom error types
//! - `models`: Money, breakdowns, dashboard data and the sample job form
//! - `navigation`: Requests screens hand back to the app
//! - `tour`: The guided tour engine, independent of any terminal
//! - `tui`: The ratatui front end hosting both screens
//! - `display`, `export`: Summary output for the command line
//! - `logging`: File-backed tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use jobdesk::config::{JobdeskPaths, Settings};
//!
//! let paths = JobdeskPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod tour;
pub mod tui;

pub use error::{JobdeskError, JobdeskResult};
