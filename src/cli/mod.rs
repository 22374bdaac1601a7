//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod filters;
pub mod history;
pub mod report;

pub use filters::{handle_filters_command, FiltersArgs};
pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_report_command, resolve_selection, OutputFormat, ReportArgs};
