//! User settings for jobdesk
//!
//! Manages display preferences and the guided tour timings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::JobdeskPaths;
use crate::error::JobdeskError;

/// Guided tour tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourSettings {
    /// Start the tour automatically after `auto_start_delay_ms`
    #[serde(default = "default_true")]
    pub auto_start: bool,

    /// Delay between opening the tutorial and the automatic start
    #[serde(default = "default_auto_start_delay_ms")]
    pub auto_start_delay_ms: u64,

    /// Time an auto-scroll is given to settle before the highlight is re-measured
    #[serde(default = "default_scroll_settle_ms")]
    pub scroll_settle_ms: u64,

    /// Outward padding around the highlighted target, in cells
    #[serde(default = "default_highlight_padding")]
    pub highlight_padding: u16,

    /// Rows at the bottom of the viewport kept clear for the step dialog
    #[serde(default = "default_reserved_bottom")]
    pub reserved_bottom: u16,
}

fn default_true() -> bool {
    true
}

fn default_auto_start_delay_ms() -> u64 {
    1000
}

fn default_scroll_settle_ms() -> u64 {
    400
}

fn default_highlight_padding() -> u16 {
    1
}

fn default_reserved_bottom() -> u16 {
    11
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            auto_start: default_true(),
            auto_start_delay_ms: default_auto_start_delay_ms(),
            scroll_settle_ms: default_scroll_settle_ms(),
            highlight_padding: default_highlight_padding(),
            reserved_bottom: default_reserved_bottom(),
        }
    }
}

impl TourSettings {
    pub fn auto_start_delay(&self) -> Duration {
        Duration::from_millis(self.auto_start_delay_ms)
    }

    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }
}

/// User settings for jobdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for money figures
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default log filter when `JOBDESK_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Guided tour tuning
    #[serde(default)]
    pub tour: TourSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
            tour: TourSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &JobdeskPaths) -> Result<Self, JobdeskError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                JobdeskError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                JobdeskError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &JobdeskPaths) -> Result<(), JobdeskError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            JobdeskError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            JobdeskError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
