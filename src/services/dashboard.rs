//! Dashboard service
//!
//! Ties loading, report computation and export together and records
//! each step in the activity log. Both the CLI and the TUI go through it.
//!
//! A failed activity-log write never undoes the step it describes; it is
//! handed back next to the result so callers can warn about it.

use std::path::Path;

use crate::activity::{ActivityEntry, ActivityLogger};
use crate::config::ExportFormat;
use crate::error::{DashboardError, DashboardResult};
use crate::export::export_report_to_path;
use crate::models::FilterSelection;
use crate::reports::{ReportOptions, SpendingReport};

use super::import::{CsvLoader, LoadedDataset};

/// A loaded dataset and the file it came from
#[derive(Debug, Clone)]
pub struct OpenDataset {
    pub source: String,
    pub loaded: LoadedDataset,
}

impl OpenDataset {
    pub fn total_rows(&self) -> usize {
        self.loaded.dataset.len()
    }
}

/// Result of a step plus the activity-log error, if the entry was not written
#[derive(Debug)]
pub struct Logged<T> {
    pub value: T,
    pub log_error: Option<DashboardError>,
}

impl<T> Logged<T> {
    fn new(value: T, log_result: DashboardResult<()>) -> Self {
        Self {
            value,
            log_error: log_result.err(),
        }
    }

    /// Warning text for an unwritten activity entry
    pub fn log_warning(&self) -> Option<String> {
        self.log_error
            .as_ref()
            .map(|e| format!("activity log not updated: {}", e))
    }
}

/// Service for the load → report → export workflow
pub struct DashboardService {
    loader: CsvLoader,
    options: ReportOptions,
    logger: ActivityLogger,
}

impl DashboardService {
    /// Create a new dashboard service
    pub fn new(logger: ActivityLogger, options: ReportOptions) -> Self {
        Self {
            loader: CsvLoader::new(),
            options,
            logger,
        }
    }

    /// Replace the CSV loader (e.g. for a different delimiter)
    pub fn with_loader(mut self, loader: CsvLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    pub fn logger(&self) -> &ActivityLogger {
        &self.logger
    }

    /// Load a customer CSV file
    pub fn open(&self, path: &Path) -> DashboardResult<Logged<OpenDataset>> {
        let loaded = self.loader.load_path(path)?;
        let source = path.display().to_string();

        let coerced = loaded.summary.coerced_nulls();
        let detail = (coerced > 0).then(|| format!("{} values coerced to null", coerced));
        let logged = self.logger.log(&ActivityEntry::load(
            self.logger.session_id(),
            Some(source.clone()),
            loaded.dataset.len(),
            detail,
        ));

        Ok(Logged::new(OpenDataset { source, loaded }, logged))
    }

    /// Compute the report for a filter selection
    pub fn report(&self, open: &OpenDataset, filter: &FilterSelection) -> SpendingReport {
        SpendingReport::generate(&open.loaded.dataset, filter, &self.options)
    }

    /// Record a computed report in the activity log
    pub fn record_report(&self, open: &OpenDataset, report: &SpendingReport) -> DashboardResult<()> {
        self.logger.log(&ActivityEntry::report(
            self.logger.session_id(),
            Some(open.source.clone()),
            report.total_rows,
            report.selected_rows,
            &report.filter,
        ))
    }

    /// Write a report to disk
    pub fn export(
        &self,
        open: &OpenDataset,
        report: &SpendingReport,
        format: ExportFormat,
        path: &Path,
    ) -> DashboardResult<Logged<()>> {
        export_report_to_path(report, format, Some(open.source.clone()), path)?;

        let logged = self.logger.log(&ActivityEntry::export(
            self.logger.session_id(),
            Some(open.source.clone()),
            report.total_rows,
            report.selected_rows,
            &report.filter,
            format!("{} -> {}", format, path.display()),
        ));

        Ok(Logged::new((), logged))
    }
}
