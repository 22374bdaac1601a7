//! CSV loading service
//!
//! Reads a customer CSV, maps the required columns by normalized header
//! name, coerces numeric columns and builds a `Dataset` with derived fields.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{CustomerRecord, Dataset};

/// Columns every input file must provide
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "customer_id",
    "age",
    "city",
    "gender",
    "purchases",
    "avg_order_value",
];

/// Positions of the required columns in the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub customer_id: usize,
    pub age: usize,
    pub city: usize,
    pub gender: usize,
    pub purchases: usize,
    pub avg_order_value: usize,
    /// Header names that are not required columns
    pub ignored: Vec<String>,
}

impl ColumnMapping {
    /// Map required columns from a header row
    ///
    /// Header names are trimmed and lower-cased first. When a name repeats,
    /// the first occurrence is used.
    pub fn from_headers(headers: &StringRecord) -> DashboardResult<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let find = |name: &str| -> DashboardResult<usize> {
            normalized
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DashboardError::missing_column(name))
        };

        let ignored = normalized
            .iter()
            .filter(|h| !REQUIRED_COLUMNS.contains(&h.as_str()))
            .cloned()
            .collect();

        Ok(Self {
            customer_id: find("customer_id")?,
            age: find("age")?,
            city: find("city")?,
            gender: find("gender")?,
            purchases: find("purchases")?,
            avg_order_value: find("avg_order_value")?,
            ignored,
        })
    }
}

/// Normalize a header cell for matching
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Coerce a cell to a number; anything unparseable becomes `None`
///
/// `NaN` and infinities also become `None`, so every coerced value is finite.
pub fn coerce_numeric(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Counts gathered while loading a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of data rows read
    pub rows: usize,
    /// Rows whose age was missing or not numeric
    pub null_age: usize,
    /// Rows whose purchases was missing or not numeric
    pub null_purchases: usize,
    /// Rows whose avg_order_value was missing or not numeric
    pub null_avg_order_value: usize,
    /// Extra columns that were ignored
    pub ignored_columns: Vec<String>,
}

impl LoadSummary {
    /// Total number of numeric cells coerced to null
    pub fn coerced_nulls(&self) -> usize {
        self.null_age + self.null_purchases + self.null_avg_order_value
    }
}

/// A loaded dataset together with its load summary
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub summary: LoadSummary,
}

/// Loader for customer CSV files
#[derive(Debug, Clone)]
pub struct CsvLoader {
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvLoader {
    /// Create a loader for comma-separated files
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a dataset from a file path
    pub fn load_path(&self, path: &Path) -> DashboardResult<LoadedDataset> {
        let file = File::open(path).map_err(|e| {
            DashboardError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.load_reader(file)
    }

    /// Load a dataset from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> DashboardResult<LoadedDataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mapping = ColumnMapping::from_headers(&headers)?;

        let mut summary = LoadSummary {
            ignored_columns: mapping.ignored.clone(),
            ..Default::default()
        };
        let mut records = Vec::new();

        for result in reader.records() {
            let record = result?;
            let parsed = parse_record(&record, &mapping);

            summary.rows += 1;
            if parsed.age.is_none() {
                summary.null_age += 1;
            }
            if parsed.purchases.is_none() {
                summary.null_purchases += 1;
            }
            if parsed.avg_order_value.is_none() {
                summary.null_avg_order_value += 1;
            }

            records.push(parsed);
        }

        Ok(LoadedDataset {
            dataset: Dataset::from_records(records),
            summary,
        })
    }
}

/// Parse one data row; short rows read missing cells as blank
fn parse_record(record: &StringRecord, mapping: &ColumnMapping) -> CustomerRecord {
    let text = |idx: usize| record.get(idx).unwrap_or("").to_string();
    let number = |idx: usize| record.get(idx).and_then(coerce_numeric);

    CustomerRecord {
        customer_id: text(mapping.customer_id),
        age: number(mapping.age),
        city: text(mapping.city),
        gender: text(mapping.gender),
        purchases: number(mapping.purchases),
        avg_order_value: number(mapping.avg_order_value),
    }
}
