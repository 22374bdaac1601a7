//! Spendboard - customer spending dashboard for the terminal
//!
//! Loads a customer CSV file (`customer_id`, `age`, `city`, `gender`,
//! `purchases`, `avg_order_value`), derives total spending and age
//! categories, and builds a filtered spending report with headline
//! metrics and the tables behind each chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Customer records, datasets and filter selections
//! - `services`: CSV loading and the load/report/export workflow
//! - `reports`: The spending report builder
//! - `display`: Terminal formatting and tables
//! - `export`: CSV, JSON and YAML report export
//! - `activity`: Activity logging
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use spendboard::models::FilterSelection;
//! use spendboard::reports::{ReportOptions, SpendingReport};
//! use spendboard::services::CsvLoader;
//!
//! let loaded = CsvLoader::new().load_path("customers.csv".as_ref())?;
//! let filter = loaded.dataset.default_selection();
//! let report = SpendingReport::generate(&loaded.dataset, &filter, &ReportOptions::default());
//! println!("{}", report.format_terminal("$"));
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::DashboardError;
