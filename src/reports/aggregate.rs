//! Null-skipping aggregation helpers
//!
//! Sums treat missing values as absent (an all-missing input sums to 0);
//! means over no valid values are `None`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Customer;

/// How values inside a group are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Mean,
}

/// One aggregated group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupValue {
    /// Group key (city, gender or age category label)
    pub key: String,
    /// Aggregated total_spent; `None` for a mean with no valid values
    pub value: Option<f64>,
    /// Number of rows in the group, including rows with missing spending
    pub count: usize,
}

/// Sum of the present values
pub fn sum_valid<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    values.into_iter().flatten().sum()
}

/// Mean of the present values
pub fn mean_valid<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Group customers by key and aggregate their total_spent
///
/// Groups are returned sorted by key. Rows whose key is `None` are left
/// out of every group.
pub fn group_spending<F>(customers: &[&Customer], key: F, aggregation: Aggregation) -> Vec<GroupValue>
where
    F: Fn(&Customer) -> Option<String>,
{
    let mut groups: BTreeMap<String, Vec<Option<f64>>> = BTreeMap::new();
    for customer in customers {
        if let Some(k) = key(customer) {
            groups.entry(k).or_default().push(customer.total_spent);
        }
    }

    groups
        .into_iter()
        .map(|(key, values)| {
            let count = values.len();
            let value = match aggregation {
                Aggregation::Sum => Some(sum_valid(values)),
                Aggregation::Mean => mean_valid(values),
            };
            GroupValue { key, value, count }
        })
        .collect()
}

/// Key function that drops empty cells
///
/// Whitespace-only values are kept verbatim and form their own group.
pub fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerRecord;

    #[test]
    fn test_sum_and_mean_skip_missing() {
        let values = vec![Some(10.0), None, Some(20.0)];
        assert_eq!(sum_valid(values.clone()), 30.0);
        assert_eq!(mean_valid(values), Some(15.0));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(sum_valid(Vec::new()), 0.0);
        assert_eq!(mean_valid(vec![None, None]), None);
    }

    #[test]
    fn test_group_spending_sorted_and_blank_dropped() {
        let customers: Vec<Customer> = vec![
            CustomerRecord::new("1", 20.0, "NY", "F", 1.0, 10.0),
            CustomerRecord::new("2", 20.0, "Boston", "F", 1.0, 30.0),
            CustomerRecord::new("3", 20.0, "NY", "F", 1.0, 20.0),
            CustomerRecord::new("4", 20.0, "", "F", 1.0, 99.0),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, r)| Customer::derive(i, r))
        .collect();
        let refs: Vec<&Customer> = customers.iter().collect();

        let groups = group_spending(&refs, |c| non_blank(c.city()), Aggregation::Mean);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "Boston");
        assert_eq!(groups[1].key, "NY");
        assert_eq!(groups[1].value, Some(15.0));
        assert_eq!(groups[1].count, 2);
    }

    #[test]
    fn test_whitespace_city_is_its_own_group() {
        let customers: Vec<Customer> = vec![
            CustomerRecord::new("1", 25.0, " ", "F", 2.0, 50.0),
            CustomerRecord::new("2", 30.0, "LA", "M", 1.0, 10.0),
            CustomerRecord::new("3", 30.0, "", "M", 1.0, 7.0),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, r)| Customer::derive(i, r))
        .collect();
        let refs: Vec<&Customer> = customers.iter().collect();

        let groups = group_spending(&refs, |c| non_blank(c.city()), Aggregation::Mean);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec![" ", "LA"]);
        assert_eq!(groups[0].value, Some(100.0));
    }

    #[test]
    fn test_group_with_only_missing_values() {
        let mut record = CustomerRecord::new("1", 20.0, "NY", "F", 1.0, 10.0);
        record.purchases = None;
        let customer = Customer::derive(0, record);
        let refs = vec![&customer];

        let means = group_spending(&refs, |c| non_blank(c.city()), Aggregation::Mean);
        let sums = group_spending(&refs, |c| non_blank(c.city()), Aggregation::Sum);

        assert_eq!(means[0].value, None);
        assert_eq!(sums[0].value, Some(0.0));
    }
}
