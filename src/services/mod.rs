//! Service layer for Spendboard
//!
//! Bridges file input with the in-memory models and the report pipeline.

pub mod dashboard;
pub mod import;

pub use dashboard::{DashboardService, Logged, OpenDataset};
pub use import::{coerce_numeric, ColumnMapping, CsvLoader, LoadSummary, LoadedDataset};
