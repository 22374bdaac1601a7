//! JSON Export functionality
//!
//! Exports the full report with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::reports::SpendingReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full report export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// File the dataset was loaded from, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// The report itself, including the filter it was built for
    pub report: SpendingReport,
}

impl ReportExport {
    /// Wrap a report for export
    pub fn new(report: &SpendingReport, source: Option<String>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            source,
            report: report.clone(),
        }
    }
}

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    report: &SpendingReport,
    source: Option<String>,
    writer: &mut W,
    pretty: bool,
) -> DashboardResult<()> {
    let export = ReportExport::new(report, source);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| DashboardError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| DashboardError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerRecord, Dataset};
    use crate::reports::ReportOptions;

    fn sample_report() -> SpendingReport {
        let dataset = Dataset::from_records(vec![
            CustomerRecord::new("1", 25.0, "NY", "F", 2.0, 50.0),
            CustomerRecord::new("2", 50.0, "LA", "M", 1.0, 100.0),
        ]);
        SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        )
    }

    #[test]
    fn test_export_and_read_back() {
        let report = sample_report();
        let mut buffer = Vec::new();
        export_report_json(&report, Some("customers.csv".into()), &mut buffer, true).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"schema_version\": \"1.0.0\""));
        assert!(text.contains("\"total_revenue\": 200.0"));

        let export: ReportExport = serde_json::from_str(&text).unwrap();
        assert_eq!(export.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(export.source.as_deref(), Some("customers.csv"));
        assert_eq!(export.report, report);
    }

    #[test]
    fn test_missing_values_serialize_as_null() {
        let dataset = Dataset::from_records(Vec::new());
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );
        let mut buffer = Vec::new();
        export_report_json(&report, None, &mut buffer, false).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"average_spending\":null"));
        assert!(!text.contains("\"source\""));
    }
}
