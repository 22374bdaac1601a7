//! Path management for Spendboard
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDBOARD_DATA_DIR` environment variable (if set)
//! 2. Platform config directory from `directories` (`~/.config/spendboard` on Linux)
//! 3. `$HOME/.config/spendboard` when no platform directory can be determined

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DashboardError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPENDBOARD_DATA_DIR";

/// Manages all paths used by Spendboard
#[derive(Debug, Clone)]
pub struct DashboardPaths {
    /// Base directory for settings, activity log and exports
    base_dir: PathBuf,
}

impl DashboardPaths {
    /// Create a new DashboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined for the platform.
    pub fn new() -> Result<Self, DashboardError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DashboardPaths with a custom base directory (useful for testing)
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

    /// Get the path to the activity log
    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Get the default directory for report exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), DashboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DashboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir()).map_err(|e| {
            DashboardError::Io(format!("Failed to create export directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if settings have been persisted
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, DashboardError> {
    if let Some(dirs) = ProjectDirs::from("", "", "spendboard") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("spendboard"))
        .map_err(|_| DashboardError::Config("Could not determine a config directory".into()))
}
