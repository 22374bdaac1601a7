//! Activity entry data structures
//!
//! One entry per dataset load, report computation or export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::FilterSelection;

/// Kind of activity recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A CSV file was loaded
    Load,
    /// A report was computed for a filter selection
    Report,
    /// A report was written to disk
    Export,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Load => write!(f, "LOAD"),
            Operation::Report => write!(f, "REPORT"),
            Operation::Export => write!(f, "EXPORT"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the activity happened (UTC)
    pub timestamp: DateTime<Utc>,

    /// Process-level session identifier
    pub session_id: Uuid,

    /// What happened
    pub operation: Operation,

    /// Source file of the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Rows in the loaded dataset
    pub total_rows: usize,

    /// Rows passing the filter (equal to total_rows for loads)
    pub selected_rows: usize,

    /// Filter in effect, for report and export entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterSelection>,

    /// Free-form detail (coercion counts, export path, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ActivityEntry {
    fn base(session_id: Uuid, operation: Operation, source: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            operation,
            source,
            total_rows: 0,
            selected_rows: 0,
            filter: None,
            detail: None,
        }
    }

    /// Entry for a dataset load
    pub fn load(session_id: Uuid, source: Option<String>, rows: usize, detail: Option<String>) -> Self {
        Self {
            total_rows: rows,
            selected_rows: rows,
            detail,
            ..Self::base(session_id, Operation::Load, source)
        }
    }

    /// Entry for a report computation
    pub fn report(
        session_id: Uuid,
        source: Option<String>,
        total_rows: usize,
        selected_rows: usize,
        filter: &FilterSelection,
    ) -> Self {
        Self {
            total_rows,
            selected_rows,
            filter: Some(filter.clone()),
            ..Self::base(session_id, Operation::Report, source)
        }
    }

    /// Entry for an export
    pub fn export(
        session_id: Uuid,
        source: Option<String>,
        total_rows: usize,
        selected_rows: usize,
        filter: &FilterSelection,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            total_rows,
            selected_rows,
            filter: Some(filter.clone()),
            detail: Some(destination.into()),
            ..Self::base(session_id, Operation::Export, source)
        }
    }

    /// One-line summary for terminal display
    pub fn format_summary(&self) -> String {
        let source = self.source.as_deref().unwrap_or("-");
        let mut line = format!(
            "{} {:<6} {} rows {}/{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            source,
            self.selected_rows,
            self.total_rows
        );
        if let Some(detail) = &self.detail {
            line.push_str(" (");
            line.push_str(detail);
            line.push(')');
        }
        line
    }
}
