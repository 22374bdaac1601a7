//! YAML Export functionality
//!
//! Exports the full report to YAML for human-readable archiving.

use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::export::json::ReportExport;
use crate::reports::SpendingReport;

/// Export a report to YAML
pub fn export_report_yaml<W: Write>(
    report: &SpendingReport,
    source: Option<String>,
    writer: &mut W,
) -> DashboardResult<()> {
    let export = ReportExport::new(report, source);
    let err = |e: std::io::Error| DashboardError::Export(e.to_string());

    writeln!(writer, "# Spendboard Report Export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| DashboardError::Export(e.to_string()))?;

    Ok(())
}
