//! Box-plot style spread summaries
//!
//! Quartiles use linear interpolation between closest ranks. Whiskers reach
//! the most extreme values within 1.5 IQR of the quartiles; anything beyond
//! is an outlier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Customer;

/// Spread of total_spent for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadSummary {
    pub key: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl SpreadSummary {
    /// Summarize a group's values; `None` when there are none
    pub fn from_values(key: impl Into<String>, values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|v| *v >= low_fence && *v <= high_fence)
            .collect();
        // Quartiles always sit inside the fences, so `inside` is never empty
        let lower_whisker = inside.first().copied().unwrap_or(q1);
        let upper_whisker = inside.last().copied().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            key: key.into(),
            count: sorted.len(),
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Linear-interpolated quantile of an ascending slice
///
/// Panics on an empty slice; callers check first.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

/// Spread per group, in first-appearance order of the keys
///
/// Rows with no key or no total_spent are skipped; groups left without
/// values are omitted.
pub fn spread_by<F>(customers: &[&Customer], key: F) -> Vec<SpreadSummary>
where
    F: Fn(&Customer) -> Option<String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for customer in customers {
        let Some(k) = key(customer) else { continue };
        let idx = match index.get(&k) {
            Some(&idx) => idx,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, Vec::new()));
                groups.len() - 1
            }
        };
        if let Some(total) = customer.total_spent {
            groups[idx].1.push(total);
        }
    }

    groups
        .into_iter()
        .filter_map(|(key, values)| SpreadSummary::from_values(key, &values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerRecord;

    #[test]
    fn test_quantile_linear() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 0.25), 1.75);
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn test_summary_with_outlier() {
        let summary = SpreadSummary::from_values(
            "NY",
            &[15.0, 10.0, 12.0, 11.0, 13.0, 12.0, 100.0, 14.0],
        )
        .unwrap();

        assert_eq!(summary.count, 8);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 100.0);
        assert_eq!(summary.q1, 11.75);
        assert_eq!(summary.median, 12.5);
        assert_eq!(summary.q3, 14.25);
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!(summary.upper_whisker, 15.0);
        assert_eq!(summary.lower_whisker, 10.0);
    }

    #[test]
    fn test_single_value() {
        let summary = SpreadSummary::from_values("LA", &[5.0]).unwrap();
        assert_eq!(summary.q1, 5.0);
        assert_eq!(summary.q3, 5.0);
        assert_eq!(summary.iqr(), 0.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_empty_values() {
        assert!(SpreadSummary::from_values("LA", &[]).is_none());
    }

    #[test]
    fn test_spread_by_keeps_first_appearance_order() {
        let mut missing = CustomerRecord::new("3", 20.0, "Austin", "F", 1.0, 1.0);
        missing.avg_order_value = None;
        let customers: Vec<Customer> = vec![
            CustomerRecord::new("1", 20.0, "Seattle", "F", 1.0, 10.0),
            CustomerRecord::new("2", 20.0, "Boston", "F", 2.0, 10.0),
            missing,
            CustomerRecord::new("4", 20.0, "Seattle", "M", 3.0, 10.0),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, r)| Customer::derive(i, r))
        .collect();
        let refs: Vec<&Customer> = customers.iter().collect();

        let spread = spread_by(&refs, |c| Some(c.city().to_string()));
        let keys: Vec<&str> = spread.iter().map(|s| s.key.as_str()).collect();

        assert_eq!(keys, vec!["Seattle", "Boston"]);
        assert_eq!(spread[0].count, 2);
    }
}
