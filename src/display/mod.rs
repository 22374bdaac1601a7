//! Display formatting for terminal output
//!
//! Provides utilities for formatting report values and tables for the
//! terminal.

pub mod report;
pub mod tables;

pub use report::{
    format_amount, format_bar, format_currency, format_load_summary, format_optional,
};
pub use tables::{group_table, option_table, spread_table, top_customers_table};
