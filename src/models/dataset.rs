//! Loaded customer dataset
//!
//! Holds the derived rows for one loaded file along with the distinct
//! filter options and their row counts, in first-appearance order.

use std::collections::{HashMap, HashSet};

use super::customer::{Customer, CustomerRecord};
use super::filter::FilterSelection;

/// All customers from one load, with derived columns
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    customers: Vec<Customer>,
    cities: Vec<String>,
    genders: Vec<String>,
    city_counts: Vec<(String, usize)>,
    gender_counts: Vec<(String, usize)>,
}

/// Distinct values with their counts, in first-appearance order
fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts
}

fn keys(counts: &[(String, usize)]) -> Vec<String> {
    counts.iter().map(|(value, _)| value.clone()).collect()
}

impl Dataset {
    /// Build a dataset, deriving spending columns for every record
    pub fn from_records(records: Vec<CustomerRecord>) -> Self {
        let customers: Vec<Customer> = records
            .into_iter()
            .enumerate()
            .map(|(row, record)| Customer::derive(row, record))
            .collect();

        let city_counts = tally(customers.iter().map(|c| c.city()));
        let gender_counts = tally(customers.iter().map(|c| c.gender()));

        Self {
            cities: keys(&city_counts),
            genders: keys(&gender_counts),
            customers,
            city_counts,
            gender_counts,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Distinct city values in first-appearance order
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Distinct gender values in first-appearance order
    pub fn genders(&self) -> &[String] {
        &self.genders
    }

    /// Selection containing every observed city and gender
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection {
            cities: self.cities.clone(),
            genders: self.genders.clone(),
        }
    }

    /// Customers passing the filter, in original row order
    pub fn filter(&self, selection: &FilterSelection) -> Vec<&Customer> {
        let cities: HashSet<&str> = selection.cities.iter().map(String::as_str).collect();
        let genders: HashSet<&str> = selection.genders.iter().map(String::as_str).collect();

        self.customers
            .iter()
            .filter(|c| cities.contains(c.city()) && genders.contains(c.gender()))
            .collect()
    }

    /// Row count per distinct city
    pub fn city_counts(&self) -> &[(String, usize)] {
        &self.city_counts
    }

    /// Row count per distinct gender
    pub fn gender_counts(&self) -> &[(String, usize)] {
        &self.gender_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            CustomerRecord::new("1", 25.0, "NY", "F", 2.0, 50.0),
            CustomerRecord::new("2", 50.0, "LA", "M", 1.0, 100.0),
            CustomerRecord::new("3", 35.0, "NY", "M", 4.0, 10.0),
            CustomerRecord::new("4", 40.0, "SF", "F", 1.0, 5.0),
        ])
    }

    #[test]
    fn test_distinct_values_in_first_appearance_order() {
        let dataset = sample();
        assert_eq!(dataset.cities(), ["NY", "LA", "SF"]);
        assert_eq!(dataset.genders(), ["F", "M"]);
    }

    #[test]
    fn test_default_selection_keeps_every_row() {
        let dataset = sample();
        let selection = dataset.default_selection();
        assert_eq!(dataset.filter(&selection).len(), dataset.len());
    }

    #[test]
    fn test_filter_is_membership_and() {
        let dataset = sample();
        let selection = FilterSelection::new(vec!["NY".into(), "SF".into()], vec!["F".into()]);

        let ids: Vec<&str> = dataset
            .filter(&selection)
            .iter()
            .map(|c| c.customer_id())
            .collect();
        assert_eq!(ids, vec!["1", "4"]);

        for customer in dataset.customers() {
            let expected = selection.contains_city(customer.city())
                && selection.contains_gender(customer.gender());
            assert_eq!(selection.matches(customer), expected);
        }
    }

    #[test]
    fn test_counts() {
        let dataset = sample();
        assert_eq!(
            dataset.city_counts(),
            [("NY".to_string(), 2), ("LA".to_string(), 1), ("SF".to_string(), 1)]
        );
        assert_eq!(
            dataset.gender_counts(),
            [("F".to_string(), 2), ("M".to_string(), 2)]
        );
    }

    #[test]
    fn test_counts_cover_every_row() {
        let records: Vec<CustomerRecord> = (0..500)
            .map(|i| {
                let city = format!("City{}", i % 50);
                let gender = if i % 2 == 0 { "F" } else { "M" };
                CustomerRecord::new(i.to_string(), 30.0, &city, gender, 1.0, 1.0)
            })
            .collect();
        let dataset = Dataset::from_records(records);

        assert_eq!(dataset.cities().len(), 50);
        assert_eq!(dataset.cities()[0], "City0");
        assert!(dataset.city_counts().iter().all(|(_, count)| *count == 10));
        let total: usize = dataset.gender_counts().iter().map(|(_, count)| count).sum();
        assert_eq!(total, 500);

        let selection = FilterSelection::new(vec!["City3".into()], vec!["M".into()]);
        assert_eq!(dataset.filter(&selection).len(), 10);
    }

    #[test]
    fn test_rows_keep_input_position() {
        let dataset = sample();
        let rows: Vec<usize> = dataset.customers().iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3]);
    }
}
