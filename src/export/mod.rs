//! Export module for Spendboard
//!
//! Writes a spending report to disk in one of three formats:
//! - CSV: one section per chart table (spreadsheet-compatible)
//! - JSON: machine-readable full report
//! - YAML: human-readable full report

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::ExportFormat;
use crate::error::{DashboardError, DashboardResult};
use crate::reports::SpendingReport;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

/// Write a report to a file in the given format
pub fn export_report_to_path(
    report: &SpendingReport,
    format: ExportFormat,
    source: Option<String>,
    path: &Path,
) -> DashboardResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            DashboardError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        DashboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_report_csv(report, &mut writer)?,
        ExportFormat::Json => export_report_json(report, source, &mut writer, true)?,
        ExportFormat::Yaml => export_report_yaml(report, source, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| DashboardError::Export(format!("Failed to write {}: {}", path.display(), e)))
}
