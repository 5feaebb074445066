//! Path management for jobdesk
//!
//! ## Path Resolution Order
//!
//! 1. `JOBDESK_HOME` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/jobdesk` on Linux, `%APPDATA%\jobdesk` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::JobdeskError;

/// Manages all paths used by jobdesk
#[derive(Debug, Clone)]
pub struct JobdeskPaths {
    /// Base directory for all jobdesk files
    base_dir: PathBuf,
}

impl JobdeskPaths {
    /// Create a new JobdeskPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, JobdeskError> {
        let base_dir = if let Ok(custom) = std::env::var("JOBDESK_HOME") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "jobdesk")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    JobdeskError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create JobdeskPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory (`<base>/logs/`)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), JobdeskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| JobdeskError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| JobdeskError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
