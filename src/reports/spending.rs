//! Spending Report
//!
//! Builds the key metrics and the seven chart tables for one dataset and
//! filter selection. Generation is a pure function of its inputs; callers
//! rebuild the report after every load or filter change.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::aggregate::{group_spending, mean_valid, non_blank, sum_valid, Aggregation, GroupValue};
use super::distribution::{spread_by, SpreadSummary};
use super::histogram::Histogram;
use crate::config::Settings;
use crate::display::report::{
    display_value, double_separator, format_bar, format_currency, format_number, format_optional,
    section_title,
};
use crate::display::tables::{group_table, spread_table, top_customers_table};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{AgeCategory, Customer, Dataset, FilterSelection};

/// Tunables for report generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of histogram bins
    pub histogram_bins: usize,
    /// Length of the top customers table
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            histogram_bins: 10,
            top_n: 5,
        }
    }
}

impl From<&Settings> for ReportOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            histogram_bins: settings.histogram_bins,
            top_n: settings.top_n,
        }
    }
}

/// Headline metrics for the filtered selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// Sum of total_spent
    pub total_revenue: f64,
    /// Mean of total_spent; `None` without any valid value
    pub average_spending: Option<f64>,
    /// Customer with the highest total_spent (first occurrence on ties)
    pub top_customer_id: Option<String>,
}

/// One point of the age vs spending scatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub customer_id: String,
    pub age: f64,
    pub total_spent: f64,
    pub age_category: AgeCategory,
    /// Bubble size
    pub purchases: Option<f64>,
}

/// One row of the top customers table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub rank: usize,
    pub customer_id: String,
    pub city: String,
    pub gender: String,
    pub total_spent: Option<f64>,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingReport {
    /// Selection the report was built for
    pub filter: FilterSelection,
    /// Rows in the loaded dataset
    pub total_rows: usize,
    /// Rows passing the filter
    pub selected_rows: usize,
    /// Headline metrics
    pub metrics: KeyMetrics,
    /// Mean spending per city, sorted by city
    pub city_avg_spending: Vec<GroupValue>,
    /// Total spending per gender, sorted by gender
    pub gender_total_spending: Vec<GroupValue>,
    /// Spending distribution
    pub spending_histogram: Histogram,
    /// Box summaries per city, in first-appearance order
    pub city_spending_spread: Vec<SpreadSummary>,
    /// Age vs spending points, in row order
    pub age_vs_spending_points: Vec<ScatterPoint>,
    /// Highest spenders, descending
    pub top_customers: Vec<TopCustomer>,
    /// Total spending per age category, sorted by label
    pub age_category_totals: Vec<GroupValue>,
}

impl SpendingReport {
    /// Generate a report for a dataset and filter selection
    pub fn generate(dataset: &Dataset, filter: &FilterSelection, options: &ReportOptions) -> Self {
        let selected = dataset.filter(filter);
        let spending: Vec<f64> = selected.iter().filter_map(|c| c.total_spent).collect();

        let metrics = KeyMetrics {
            total_revenue: sum_valid(selected.iter().map(|c| c.total_spent)),
            average_spending: mean_valid(selected.iter().map(|c| c.total_spent)),
            top_customer_id: top_customer(&selected).map(|c| c.customer_id().to_string()),
        };

        let age_vs_spending_points = selected
            .iter()
            .filter_map(|c| {
                Some(ScatterPoint {
                    customer_id: c.customer_id().to_string(),
                    age: c.age()?,
                    total_spent: c.total_spent?,
                    age_category: c.age_category,
                    purchases: c.purchases(),
                })
            })
            .collect();

        Self {
            filter: filter.clone(),
            total_rows: dataset.len(),
            selected_rows: selected.len(),
            metrics,
            city_avg_spending: group_spending(&selected, |c| non_blank(c.city()), Aggregation::Mean),
            gender_total_spending: group_spending(
                &selected,
                |c| non_blank(c.gender()),
                Aggregation::Sum,
            ),
            spending_histogram: Histogram::from_values(&spending, options.histogram_bins),
            city_spending_spread: spread_by(&selected, |c| non_blank(c.city())),
            age_vs_spending_points,
            top_customers: top_customers(&selected, options.top_n),
            age_category_totals: group_spending(
                &selected,
                |c| Some(c.age_category.label().to_string()),
                Aggregation::Sum,
            ),
        }
    }

    /// The top customer id, or `EmptySelection` when no row has spending
    pub fn top_customer(&self) -> DashboardResult<&str> {
        self.metrics
            .top_customer_id
            .as_deref()
            .ok_or(DashboardError::EmptySelection)
    }

    /// Whether the filter left no rows
    pub fn is_empty(&self) -> bool {
        self.selected_rows == 0
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Customer Spending Report\n");
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!(
            "Customers: {} of {} selected\n",
            self.selected_rows, self.total_rows
        ));
        output.push_str(&format!(
            "Cities:    {}\n",
            join_values(&self.filter.cities)
        ));
        output.push_str(&format!(
            "Genders:   {}\n\n",
            join_values(&self.filter.genders)
        ));

        output.push_str(&section_title("Key Metrics"));
        output.push_str(&format!(
            "Total Revenue:     {}\n",
            format_currency(self.metrics.total_revenue, currency)
        ));
        output.push_str(&format!(
            "Average Spending:  {}\n",
            self.metrics
                .average_spending
                .map(|v| format_currency(v, currency))
                .unwrap_or_else(|| "n/a".to_string())
        ));
        output.push_str(&format!(
            "Top Customer ID:   {}\n\n",
            self.metrics.top_customer_id.as_deref().unwrap_or("n/a")
        ));

        if self.is_empty() {
            output.push_str("No customers match the current filters.\n");
            return output;
        }

        output.push_str(&section_title("Average Spending per City"));
        output.push_str(&group_table("City", &self.city_avg_spending, currency));
        output.push_str("\n\n");

        output.push_str(&section_title("Total Spending by Gender"));
        output.push_str(&group_table("Gender", &self.gender_total_spending, currency));
        output.push_str("\n\n");

        output.push_str(&section_title("Distribution of Customer Spending"));
        let max_count = self.spending_histogram.max_count() as f64;
        for bin in &self.spending_histogram.bins {
            output.push_str(&format!(
                "{:>12} - {:<12} {:>5}  {}\n",
                format_optional(Some(bin.lower), currency),
                format_optional(Some(bin.upper), currency),
                bin.count,
                format_bar(bin.count as f64, max_count, 30)
            ));
        }
        output.push('\n');

        output.push_str(&section_title("Spending Spread by City"));
        output.push_str(&spread_table(&self.city_spending_spread, currency));
        output.push_str("\n\n");

        output.push_str(&section_title("Age vs Spending"));
        output.push_str(&format!(
            "{} plotted customers\n",
            self.age_vs_spending_points.len()
        ));
        for category in AgeCategory::ALL {
            let points: Vec<&ScatterPoint> = self
                .age_vs_spending_points
                .iter()
                .filter(|p| p.age_category == category)
                .collect();
            if points.is_empty() {
                continue;
            }
            let ages: Vec<f64> = points.iter().map(|p| p.age).collect();
            let min_age = ages.iter().copied().fold(f64::INFINITY, f64::min);
            let max_age = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            output.push_str(&format!(
                "  {:<7} {:>4} points, ages {}-{}, mean spend {}\n",
                category.label(),
                points.len(),
                format_number(min_age),
                format_number(max_age),
                format_optional(mean_valid(points.iter().map(|p| Some(p.total_spent))), currency)
            ));
        }
        output.push('\n');

        output.push_str(&section_title(&format!(
            "Top {} Customers by Spending",
            self.top_customers.len()
        )));
        output.push_str(&top_customers_table(&self.top_customers, currency));
        output.push_str("\n\n");

        output.push_str(&section_title("Spending by Age Category"));
        output.push_str(&group_table("Age Category", &self.age_category_totals, currency));
        output.push('\n');

        output
    }
}

/// Row with the maximum total_spent; the earliest row wins ties
fn top_customer<'a>(selected: &[&'a Customer]) -> Option<&'a Customer> {
    let mut best: Option<(&Customer, f64)> = None;
    for customer in selected {
        if let Some(total) = customer.total_spent {
            match best {
                Some((_, best_total)) if total <= best_total => {}
                _ => best = Some((*customer, total)),
            }
        }
    }
    best.map(|(customer, _)| customer)
}

/// Highest spenders first; missing spending sorts last and ties keep row order
fn top_customers(selected: &[&Customer], limit: usize) -> Vec<TopCustomer> {
    let mut ordered: Vec<&Customer> = selected.to_vec();
    ordered.sort_by(|a, b| match (a.total_spent, b.total_spent) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, c)| TopCustomer {
            rank: idx + 1,
            customer_id: c.customer_id().to_string(),
            city: c.city().to_string(),
            gender: c.gender().to_string(),
            total_spent: c.total_spent,
        })
        .collect()
}

fn join_values(values: &[String]) -> String {
    if values.is_empty() {
        return "(none)".to_string();
    }
    values
        .iter()
        .map(|v| display_value(v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerRecord;

    fn two_customers() -> Dataset {
        Dataset::from_records(vec![
            CustomerRecord::new("1", 25.0, "NY", "F", 2.0, 50.0),
            CustomerRecord::new("2", 50.0, "LA", "M", 1.0, 100.0),
        ])
    }

    fn mixed() -> Dataset {
        let mut bad_age = CustomerRecord::new("c4", 0.0, "NY", "M", 3.0, 40.0);
        bad_age.age = None;
        let mut bad_spend = CustomerRecord::new("c5", 38.0, "SF", "F", 1.0, 0.0);
        bad_spend.avg_order_value = None;

        Dataset::from_records(vec![
            CustomerRecord::new("c1", 22.0, "NY", "F", 5.0, 20.0),
            CustomerRecord::new("c2", 33.0, "LA", "M", 2.0, 75.0),
            CustomerRecord::new("c3", 47.0, "LA", "F", 10.0, 30.0),
            bad_age,
            bad_spend,
            CustomerRecord::new("c6", 60.0, "SF", "M", 1.0, 150.0),
            CustomerRecord::new("c7", 29.0, "NY", "M", 4.0, 25.0),
        ])
    }

    #[test]
    fn test_worked_example() {
        let dataset = two_customers();
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );

        let totals: Vec<Option<f64>> = dataset.customers().iter().map(|c| c.total_spent).collect();
        assert_eq!(totals, vec![Some(100.0), Some(100.0)]);
        let categories: Vec<AgeCategory> =
            dataset.customers().iter().map(|c| c.age_category).collect();
        assert_eq!(categories, vec![AgeCategory::Young, AgeCategory::Senior]);

        assert_eq!(report.metrics.total_revenue, 200.0);
        assert_eq!(report.metrics.average_spending, Some(100.0));
        assert_eq!(report.metrics.top_customer_id.as_deref(), Some("1"));
        assert_eq!(report.top_customer().unwrap(), "1");
    }

    #[test]
    fn test_metrics_skip_missing_spending() {
        let dataset = mixed();
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );

        // 100 + 150 + 300 + 120 + 150 + 100
        assert_eq!(report.metrics.total_revenue, 920.0);
        assert_eq!(report.metrics.average_spending, Some(920.0 / 6.0));
        assert_eq!(report.metrics.top_customer_id.as_deref(), Some("c3"));
        assert_eq!(report.selected_rows, 7);
    }

    #[test]
    fn test_group_tables() {
        let dataset = mixed();
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );

        let city_keys: Vec<&str> = report
            .city_avg_spending
            .iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(city_keys, vec!["LA", "NY", "SF"]);
        assert_eq!(report.city_avg_spending[0].value, Some(225.0));
        // SF has one missing total; mean uses the valid one only
        assert_eq!(report.city_avg_spending[2].value, Some(150.0));

        assert_eq!(report.gender_total_spending[0].key, "F");
        assert_eq!(report.gender_total_spending[0].value, Some(400.0));
        assert_eq!(report.gender_total_spending[1].value, Some(520.0));

        let age_keys: Vec<&str> = report
            .age_category_totals
            .iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(age_keys, vec!["Mid", "Other", "Senior", "Young"]);
        assert_eq!(report.age_category_totals[0].value, Some(150.0));
        assert_eq!(report.age_category_totals[1].value, Some(120.0));
    }

    #[test]
    fn test_whitespace_city_shows_up_in_city_tables() {
        let dataset = Dataset::from_records(vec![
            CustomerRecord::new("1", 25.0, " ", "F", 2.0, 50.0),
            CustomerRecord::new("2", 30.0, "LA", "M", 1.0, 10.0),
        ]);
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );

        assert_eq!(dataset.cities(), [" ", "LA"]);
        assert_eq!(report.metrics.total_revenue, 110.0);

        let avg_keys: Vec<&str> = report
            .city_avg_spending
            .iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(avg_keys, vec![" ", "LA"]);
        let spread_keys: Vec<&str> = report
            .city_spending_spread
            .iter()
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(spread_keys, vec![" ", "LA"]);
    }

    #[test]
    fn test_revenue_matches_filtered_rows() {
        let dataset = mixed();
        let filter = FilterSelection::new(vec!["NY".into(), "SF".into()], vec!["M".into()]);
        let options = ReportOptions::default();

        let report = SpendingReport::generate(&dataset, &filter, &options);
        let expected: f64 = dataset
            .customers()
            .iter()
            .filter(|c| filter.matches(c))
            .filter_map(|c| c.total_spent)
            .sum();

        assert_eq!(report.selected_rows, 3);
        assert_eq!(report.metrics.total_revenue, expected);

        let again = SpendingReport::generate(&dataset, &filter, &options);
        assert_eq!(report, again);
    }

    #[test]
    fn test_top_customers_ordering() {
        let dataset = mixed();
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );

        let ids: Vec<&str> = report
            .top_customers
            .iter()
            .map(|t| t.customer_id.as_str())
            .collect();
        // c2 and c6 tie at 150; c2 comes first in the file
        assert_eq!(ids, vec!["c3", "c2", "c6", "c4", "c1"]);
        assert_eq!(report.top_customers[0].rank, 1);

        for pair in report.top_customers.windows(2) {
            assert!(pair[0].total_spent >= pair[1].total_spent);
        }
    }

    #[test]
    fn test_top_customers_short_selection_puts_missing_last() {
        let dataset = mixed();
        let filter = FilterSelection::new(vec!["SF".into()], vec!["F".into(), "M".into()]);
        let report = SpendingReport::generate(&dataset, &filter, &ReportOptions::default());

        assert_eq!(report.top_customers.len(), 2);
        assert_eq!(report.top_customers[0].customer_id, "c6");
        assert_eq!(report.top_customers[1].total_spent, None);
    }

    #[test]
    fn test_scatter_skips_missing_age_or_spend() {
        let dataset = mixed();
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );

        let ids: Vec<&str> = report
            .age_vs_spending_points
            .iter()
            .map(|p| p.customer_id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c2", "c3", "c6", "c7"]);
        assert_eq!(report.age_vs_spending_points[2].purchases, Some(10.0));
    }

    #[test]
    fn test_histogram_and_spread() {
        let dataset = mixed();
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions {
                histogram_bins: 4,
                top_n: 5,
            },
        );

        assert_eq!(report.spending_histogram.bins.len(), 4);
        assert_eq!(report.spending_histogram.total(), 6);
        assert_eq!(report.spending_histogram.bins[0].lower, 100.0);
        assert_eq!(report.spending_histogram.bins[3].upper, 300.0);

        let keys: Vec<&str> = report
            .city_spending_spread
            .iter()
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(keys, vec!["NY", "LA", "SF"]);
        assert_eq!(report.city_spending_spread[0].count, 3);
        assert_eq!(report.city_spending_spread[2].count, 1);
    }

    #[test]
    fn test_empty_selection() {
        let dataset = mixed();
        let filter = FilterSelection::new(vec!["Nowhere".into()], vec!["F".into()]);
        let report = SpendingReport::generate(&dataset, &filter, &ReportOptions::default());

        assert!(report.is_empty());
        assert_eq!(report.metrics.total_revenue, 0.0);
        assert_eq!(report.metrics.average_spending, None);
        assert_eq!(report.metrics.top_customer_id, None);
        assert!(matches!(
            report.top_customer(),
            Err(DashboardError::EmptySelection)
        ));
        assert!(report.city_avg_spending.is_empty());
        assert!(report.spending_histogram.is_empty());
        assert!(report.top_customers.is_empty());
        assert!(report.age_category_totals.is_empty());

        let text = report.format_terminal("$");
        assert!(text.contains("Total Revenue:     $0"));
        assert!(text.contains("No customers match"));
    }

    #[test]
    fn test_all_missing_spending_has_no_top_customer() {
        let mut record = CustomerRecord::new("x", 20.0, "NY", "F", 1.0, 1.0);
        record.purchases = None;
        let dataset = Dataset::from_records(vec![record]);
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );

        assert_eq!(report.selected_rows, 1);
        assert_eq!(report.metrics.top_customer_id, None);
        assert_eq!(report.top_customers.len(), 1);
        assert_eq!(report.age_category_totals[0].value, Some(0.0));
    }

    #[test]
    fn test_format_terminal_sections() {
        let dataset = mixed();
        let report = SpendingReport::generate(
            &dataset,
            &dataset.default_selection(),
            &ReportOptions::default(),
        );
        let text = report.format_terminal("$");

        assert!(text.contains("Total Revenue:     $920"));
        assert!(text.contains("Top Customer ID:   c3"));
        assert!(text.contains("Average Spending per City"));
        assert!(text.contains("Spending Spread by City"));
        assert!(text.contains("Top 5 Customers by Spending"));
        assert!(text.contains("Spending by Age Category"));
    }
}
