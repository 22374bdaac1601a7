//! Customer models
//!
//! `CustomerRecord` is one coerced input row. `Customer` adds the derived
//! spending columns, which are computed once when a dataset is built.

use serde::{Deserialize, Serialize};

use super::age_category::AgeCategory;

/// One row of the input file after numeric coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Opaque customer identifier
    pub customer_id: String,

    /// Age in years, if the cell held a number
    pub age: Option<f64>,

    /// City name, verbatim (empty when the cell was blank)
    pub city: String,

    /// Gender label, verbatim (empty when the cell was blank)
    pub gender: String,

    /// Number of purchases, if the cell held a number
    pub purchases: Option<f64>,

    /// Average order value, if the cell held a number
    pub avg_order_value: Option<f64>,
}

impl CustomerRecord {
    /// Create a record with every numeric field present
    pub fn new(
        customer_id: impl Into<String>,
        age: f64,
        city: impl Into<String>,
        gender: impl Into<String>,
        purchases: f64,
        avg_order_value: f64,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            age: Some(age),
            city: city.into(),
            gender: gender.into(),
            purchases: Some(purchases),
            avg_order_value: Some(avg_order_value),
        }
    }
}

/// A customer row with derived spending columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    /// Zero-based position in the input file, excluding the header
    pub row: usize,

    /// The coerced input values
    #[serde(flatten)]
    pub record: CustomerRecord,

    /// purchases * avg_order_value
    pub total_spent: Option<f64>,

    /// Bucket derived from age
    pub age_category: AgeCategory,
}

impl Customer {
    /// Derive spending columns for a record
    pub fn derive(row: usize, record: CustomerRecord) -> Self {
        let total_spent = total_spent(record.purchases, record.avg_order_value);
        let age_category = AgeCategory::from_age(record.age);
        Self {
            row,
            record,
            total_spent,
            age_category,
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.record.customer_id
    }

    pub fn city(&self) -> &str {
        &self.record.city
    }

    pub fn gender(&self) -> &str {
        &self.record.gender
    }

    pub fn age(&self) -> Option<f64> {
        self.record.age
    }

    pub fn purchases(&self) -> Option<f64> {
        self.record.purchases
    }
}

/// Spending for one customer; missing when either factor is missing or the
/// product overflows
pub fn total_spent(purchases: Option<f64>, avg_order_value: Option<f64>) -> Option<f64> {
    match (purchases, avg_order_value) {
        (Some(p), Some(v)) => Some(p * v).filter(|t| t.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_spent_product() {
        assert_eq!(total_spent(Some(2.0), Some(50.0)), Some(100.0));
        assert_eq!(total_spent(Some(0.0), Some(50.0)), Some(0.0));
    }

    #[test]
    fn test_total_spent_missing_input() {
        assert_eq!(total_spent(None, Some(50.0)), None);
        assert_eq!(total_spent(Some(2.0), None), None);
        assert_eq!(total_spent(None, None), None);
    }

    #[test]
    fn test_total_spent_overflow_is_missing() {
        assert_eq!(total_spent(Some(1e200), Some(1e200)), None);
        assert_eq!(total_spent(Some(-1e200), Some(1e200)), None);
        assert_eq!(total_spent(Some(f64::MAX), Some(1.0)), Some(f64::MAX));
    }

    #[test]
    fn test_derive() {
        let record = CustomerRecord::new("7", 52.0, "LA", "M", 3.0, 20.5);
        let customer = Customer::derive(4, record);

        assert_eq!(customer.row, 4);
        assert_eq!(customer.customer_id(), "7");
        assert_eq!(customer.total_spent, Some(61.5));
        assert_eq!(customer.age_category, AgeCategory::Senior);
    }

    #[test]
    fn test_derive_with_missing_age() {
        let mut record = CustomerRecord::new("8", 0.0, "NY", "F", 1.0, 10.0);
        record.age = None;
        let customer = Customer::derive(0, record);

        assert_eq!(customer.age_category, AgeCategory::Other);
        assert_eq!(customer.total_spent, Some(10.0));
    }
}
