//! Table rendering for report sections
//!
//! Uses `tabled` for aligned, bordered terminal tables.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::{display_value, format_bar, format_number, format_optional};
use crate::reports::{GroupValue, SpreadSummary, TopCustomer};

const BAR_WIDTH: usize = 24;

/// Render grouped values with a proportional bar column
pub fn group_table(key_header: &str, groups: &[GroupValue], currency: &str) -> String {
    let max_value = groups
        .iter()
        .filter_map(|g| g.value)
        .fold(0.0_f64, f64::max);

    let mut builder = Builder::default();
    builder.push_record(vec![
        key_header.to_string(),
        "Customers".to_string(),
        "Spending".to_string(),
        String::new(),
    ]);
    for group in groups {
        builder.push_record(vec![
            display_value(&group.key).to_string(),
            group.count.to_string(),
            format_optional(group.value, currency),
            format_bar(group.value.unwrap_or(0.0), max_value, BAR_WIDTH),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..3), Alignment::right());
    table.to_string()
}

/// Render box summaries, one row per group
pub fn spread_table(spreads: &[SpreadSummary], currency: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(
        ["City", "N", "Min", "Q1", "Median", "Q3", "Max", "Outliers"].map(String::from),
    );
    for spread in spreads {
        let outliers = if spread.outliers.is_empty() {
            "-".to_string()
        } else {
            spread
                .outliers
                .iter()
                .map(|v| format_number(*v))
                .collect::<Vec<_>>()
                .join(", ")
        };
        builder.push_record(vec![
            display_value(&spread.key).to_string(),
            spread.count.to_string(),
            format_optional(Some(spread.min), currency),
            format_optional(Some(spread.q1), currency),
            format_optional(Some(spread.median), currency),
            format_optional(Some(spread.q3), currency),
            format_optional(Some(spread.max), currency),
            outliers,
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..7), Alignment::right());
    table.to_string()
}

#[derive(Tabled)]
struct TopCustomerRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Customer ID")]
    customer_id: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "Total Spent")]
    total_spent: String,
}

/// Render the top customers table
pub fn top_customers_table(customers: &[TopCustomer], currency: &str) -> String {
    let rows: Vec<TopCustomerRow> = customers
        .iter()
        .map(|c| TopCustomerRow {
            rank: c.rank,
            customer_id: c.customer_id.clone(),
            city: display_value(&c.city).to_string(),
            gender: display_value(&c.gender).to_string(),
            total_spent: format_optional(c.total_spent, currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::last(), Alignment::right());
    table.to_string()
}

/// Render distinct filter options with their row counts
pub fn option_table(header: &str, options: &[(String, usize)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec![header.to_string(), "Customers".to_string()]);
    for (value, count) in options {
        builder.push_record(vec![display_value(value).to_string(), count.to_string()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::last(), Alignment::right());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_table_contents() {
        let groups = vec![
            GroupValue {
                key: "LA".into(),
                value: Some(225.0),
                count: 2,
            },
            GroupValue {
                key: "".into(),
                value: None,
                count: 1,
            },
        ];
        let text = group_table("City", &groups, "$");

        assert!(text.contains("City"));
        assert!(text.contains("$225.00"));
        assert!(text.contains("(blank)"));
        assert!(text.contains("n/a"));
    }

    #[test]
    fn test_top_customers_table() {
        let customers = vec![TopCustomer {
            rank: 1,
            customer_id: "c3".into(),
            city: "LA".into(),
            gender: "F".into(),
            total_spent: Some(300.0),
        }];
        let text = top_customers_table(&customers, "$");

        assert!(text.contains("Customer ID"));
        assert!(text.contains("c3"));
        assert!(text.contains("$300.00"));
    }

    #[test]
    fn test_option_table() {
        let text = option_table("Gender", &[("F".into(), 3), ("M".into(), 4)]);
        assert!(text.contains("Gender"));
        assert!(text.contains('4'));
    }
}
