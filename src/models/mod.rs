//! Core data models for Spendboard
//!
//! This module contains the data structures for the customer domain:
//! input records, derived customers, age buckets, filter selections and
//! the loaded dataset.

pub mod age_category;
pub mod customer;
pub mod dataset;
pub mod filter;

pub use age_category::AgeCategory;
pub use customer::{Customer, CustomerRecord};
pub use dataset::Dataset;
pub use filter::FilterSelection;
