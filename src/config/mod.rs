//! Configuration module for Spendboard
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence
//! - Report defaults (histogram bins, top-N size, currency symbol)

pub mod paths;
pub mod settings;

pub use paths::DashboardPaths;
pub use settings::{ExportFormat, Settings};
