//! Filter selection
//!
//! The set of cities and genders the user has chosen to include.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::customer::Customer;

/// Chosen city and gender values
///
/// A customer passes when its city is selected AND its gender is selected.
/// An empty list selects nothing for that column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected city values
    pub cities: Vec<String>,
    /// Selected gender values
    pub genders: Vec<String>,
}

impl FilterSelection {
    /// Create a selection from explicit value lists
    pub fn new(cities: Vec<String>, genders: Vec<String>) -> Self {
        Self {
            cities: dedup(cities),
            genders: dedup(genders),
        }
    }

    /// Check whether a customer passes the filter
    pub fn matches(&self, customer: &Customer) -> bool {
        self.contains_city(customer.city()) && self.contains_gender(customer.gender())
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn contains_gender(&self, gender: &str) -> bool {
        self.genders.iter().any(|g| g == gender)
    }

    /// Flip a city in or out of the selection
    pub fn toggle_city(&mut self, city: &str) {
        if self.contains_city(city) {
            self.cities.retain(|c| c != city);
        } else {
            self.cities.push(city.to_string());
        }
    }

    /// Flip a gender in or out of the selection
    pub fn toggle_gender(&mut self, gender: &str) {
        if self.contains_gender(gender) {
            self.genders.retain(|g| g != gender);
        } else {
            self.genders.push(gender.to_string());
        }
    }

    /// Whether the selection can match any row at all
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() || self.genders.is_empty()
    }
}

/// Drop repeated values, keeping the first occurrence
fn dedup(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerRecord;

    fn customer(city: &str, gender: &str) -> Customer {
        Customer::derive(0, CustomerRecord::new("1", 30.0, city, gender, 1.0, 1.0))
    }

    #[test]
    fn test_matches_requires_both() {
        let selection = FilterSelection::new(vec!["NY".into()], vec!["F".into()]);

        assert!(selection.matches(&customer("NY", "F")));
        assert!(!selection.matches(&customer("NY", "M")));
        assert!(!selection.matches(&customer("LA", "F")));
    }

    #[test]
    fn test_new_deduplicates() {
        let selection = FilterSelection::new(
            vec!["NY".into(), "NY".into(), "LA".into()],
            vec!["F".into()],
        );
        assert_eq!(selection.cities, vec!["NY".to_string(), "LA".to_string()]);
    }

    #[test]
    fn test_toggle() {
        let mut selection = FilterSelection::new(vec!["NY".into()], vec!["F".into()]);

        selection.toggle_city("NY");
        assert!(!selection.contains_city("NY"));
        assert!(selection.is_empty());

        selection.toggle_city("NY");
        selection.toggle_gender("M");
        assert!(selection.contains_city("NY"));
        assert!(selection.contains_gender("M"));
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_blank_values_are_selectable() {
        let selection = FilterSelection::new(vec!["".into()], vec!["F".into()]);
        assert!(selection.matches(&customer("", "F")));
        assert!(!selection.matches(&customer("NY", "F")));
    }
}
