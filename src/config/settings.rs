//! User settings for Spendboard
//!
//! Manages report defaults and logging preferences.

use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::DashboardError;

/// File format used when exporting a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One CSV section per chart table
    #[default]
    Csv,
    /// Full report as JSON
    Json,
    /// Full report as YAML
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// Guess the format from a path's extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// User settings for Spendboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in metric and table output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of equal-width bins in the spending histogram
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Number of customers in the top spenders table
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Whether loads, reports and exports are appended to the activity log
    #[serde(default = "default_true")]
    pub activity_log_enabled: bool,

    /// Format used by exports when neither flag nor extension decide
    #[serde(default)]
    pub default_export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_histogram_bins() -> usize {
    10
}

fn default_top_n() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            histogram_bins: default_histogram_bins(),
            top_n: default_top_n(),
            activity_log_enabled: true,
            default_export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DashboardError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            DashboardError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DashboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the report builder cannot work with
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.histogram_bins == 0 {
            return Err(DashboardError::Validation(
                "histogram_bins must be at least 1".into(),
            ));
        }
        if self.top_n == 0 {
            return Err(DashboardError::Validation("top_n must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.histogram_bins, 10);
        assert_eq!(settings.top_n, 5);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.activity_log_enabled);
        assert_eq!(settings.default_export_format, ExportFormat::Csv);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.top_n = 3;
        settings.activity_log_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.top_n, 3);
        assert!(!loaded.activity_log_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol":"€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.histogram_bins, 10);
        assert!(settings.activity_log_enabled);
    }

    #[test]
    fn test_invalid_settings_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"histogram_bins":0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_export_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.JSON")),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out.yml")),
            Some(ExportFormat::Yaml)
        );
        assert_eq!(ExportFormat::from_path(Path::new("out")), None);
    }
}
