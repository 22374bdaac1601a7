//! CSV Export functionality
//!
//! Writes the report as a sequence of sections, one per chart table. Each
//! section starts with a `# <name>` marker row followed by a header row.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::{DashboardError, DashboardResult};
use crate::reports::{GroupValue, SpendingReport};

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Export a spending report to CSV
pub fn export_report_csv<W: Write>(report: &SpendingReport, writer: W) -> DashboardResult<()> {
    let mut csv = WriterBuilder::new().flexible(true).from_writer(writer);

    csv.write_record(["# metrics"])?;
    csv.write_record(["metric", "value"])?;
    csv.write_record(["total_revenue".to_string(), report.metrics.total_revenue.to_string()])?;
    csv.write_record([
        "average_spending".to_string(),
        opt(report.metrics.average_spending),
    ])?;
    csv.write_record([
        "top_customer_id".to_string(),
        report.metrics.top_customer_id.clone().unwrap_or_default(),
    ])?;
    csv.write_record(["selected_rows".to_string(), report.selected_rows.to_string()])?;
    csv.write_record(["total_rows".to_string(), report.total_rows.to_string()])?;

    write_groups(&mut csv, "city_avg_spending", "city", &report.city_avg_spending)?;
    write_groups(
        &mut csv,
        "gender_total_spending",
        "gender",
        &report.gender_total_spending,
    )?;

    csv.write_record(["# spending_histogram"])?;
    csv.write_record(["lower", "upper", "count"])?;
    for bin in &report.spending_histogram.bins {
        csv.write_record([
            bin.lower.to_string(),
            bin.upper.to_string(),
            bin.count.to_string(),
        ])?;
    }

    csv.write_record(["# city_spending_spread"])?;
    csv.write_record([
        "city",
        "count",
        "min",
        "q1",
        "median",
        "q3",
        "max",
        "lower_whisker",
        "upper_whisker",
        "outliers",
    ])?;
    for spread in &report.city_spending_spread {
        let outliers = spread
            .outliers
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(";");
        csv.write_record([
            spread.key.clone(),
            spread.count.to_string(),
            spread.min.to_string(),
            spread.q1.to_string(),
            spread.median.to_string(),
            spread.q3.to_string(),
            spread.max.to_string(),
            spread.lower_whisker.to_string(),
            spread.upper_whisker.to_string(),
            outliers,
        ])?;
    }

    csv.write_record(["# age_vs_spending_points"])?;
    csv.write_record(["customer_id", "age", "total_spent", "age_category", "purchases"])?;
    for point in &report.age_vs_spending_points {
        csv.write_record([
            point.customer_id.clone(),
            point.age.to_string(),
            point.total_spent.to_string(),
            point.age_category.label().to_string(),
            opt(point.purchases),
        ])?;
    }

    csv.write_record(["# top_customers"])?;
    csv.write_record(["rank", "customer_id", "city", "gender", "total_spent"])?;
    for top in &report.top_customers {
        csv.write_record([
            top.rank.to_string(),
            top.customer_id.clone(),
            top.city.clone(),
            top.gender.clone(),
            opt(top.total_spent),
        ])?;
    }

    write_groups(
        &mut csv,
        "age_category_totals",
        "age_category",
        &report.age_category_totals,
    )?;

    csv.flush()
        .map_err(|e| DashboardError::Export(format!("Failed to flush CSV export: {}", e)))?;
    Ok(())
}

fn write_groups<W: Write>(
    csv: &mut csv::Writer<W>,
    section: &str,
    key_header: &str,
    groups: &[GroupValue],
) -> DashboardResult<()> {
    csv.write_record([format!("# {}", section)])?;
    csv.write_record([key_header, "count", "value"])?;
    for group in groups {
        csv.write_record([group.key.clone(), group.count.to_string(), opt(group.value)])?;
    }
    Ok(())
}
