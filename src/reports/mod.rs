//! Reports module for Spendboard
//!
//! Builds the spending report: headline metrics plus the grouped,
//! bucketed and ranked tables behind each chart.

pub mod aggregate;
pub mod distribution;
pub mod histogram;
pub mod spending;

pub use aggregate::{Aggregation, GroupValue};
pub use distribution::SpreadSummary;
pub use histogram::{Histogram, HistogramBin};
pub use spending::{KeyMetrics, ReportOptions, ScatterPoint, SpendingReport, TopCustomer};
