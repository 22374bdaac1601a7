//! Report formatting utilities for terminal output
//!
//! Currency, count and bar helpers shared by the terminal report and the TUI.

use std::borrow::Cow;

use crate::services::LoadSummary;

/// Insert thousands separators into an unsigned digit string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount with a currency symbol, separators and fixed decimals
pub fn format_amount(value: f64, symbol: &str, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, frac) = match formatted.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match frac {
        Some(frac) => format!("{}{}{}.{}", sign, symbol, group_thousands(whole), frac),
        None => format!("{}{}{}", sign, symbol, group_thousands(whole)),
    }
}

/// Metric style: whole currency units, e.g. `$12,345`
pub fn format_currency(value: f64, symbol: &str) -> String {
    format_amount(value, symbol, 0)
}

/// Table style: two decimals, or `n/a` when missing
pub fn format_optional(value: Option<f64>, symbol: &str) -> String {
    match value {
        Some(v) => format_amount(v, symbol, 2),
        None => "n/a".to_string(),
    }
}

/// Format a plain number, dropping a trailing `.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Label for a city/gender cell
///
/// Empty cells read `(blank)`; whitespace-only cells are quoted so they stay
/// visible and distinct from each other.
pub fn display_value(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        Cow::Borrowed("(blank)")
    } else if value.trim().is_empty() {
        Cow::Owned(format!("{:?}", value))
    } else {
        Cow::Borrowed(value)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section title with an underline
pub fn section_title(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count()))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

/// Summary printed after a CSV file is loaded
pub fn format_load_summary(source: &str, summary: &LoadSummary) -> String {
    let mut output = format!("Loaded {} customers from {}\n", summary.rows, source);

    let coerced = [
        ("age", summary.null_age),
        ("purchases", summary.null_purchases),
        ("avg_order_value", summary.null_avg_order_value),
    ];
    for (column, count) in coerced.iter().filter(|(_, count)| *count > 0) {
        output.push_str(&format!(
            "  {} {} value(s) missing or non-numeric\n",
            count, column
        ));
    }

    if !summary.ignored_columns.is_empty() {
        output.push_str(&format!(
            "  Ignored columns: {}\n",
            summary.ignored_columns.join(", ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "$"), "$0");
        assert_eq!(format_currency(200.0, "$"), "$200");
        assert_eq!(format_currency(1234567.4, "$"), "$1,234,567");
        assert_eq!(format_currency(999.6, "$"), "$1,000");
        assert_eq!(format_currency(-1500.0, "$"), "-$1,500");
        assert_eq!(format_currency(-0.2, "$"), "$0");
    }

    #[test]
    fn test_format_amount_decimals() {
        assert_eq!(format_amount(1234.5, "€", 2), "€1,234.50");
        assert_eq!(format_amount(12.0, "", 2), "12.00");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(100.0), "$"), "$100.00");
        assert_eq!(format_optional(None, "$"), "n/a");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(2.5), "2.50");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(""), "(blank)");
        assert_eq!(display_value(" "), "\" \"");
        assert_eq!(display_value("NY"), "NY");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "Hell…");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("São Paulo", 4), "São…");
    }

    #[test]
    fn test_format_load_summary() {
        let summary = LoadSummary {
            rows: 4,
            null_age: 0,
            null_purchases: 2,
            null_avg_order_value: 0,
            ignored_columns: vec!["email".into()],
        };
        let text = format_load_summary("customers.csv", &summary);

        assert!(text.starts_with("Loaded 4 customers from customers.csv"));
        assert!(text.contains("2 purchases value(s) missing"));
        assert!(!text.contains("age value"));
        assert!(text.contains("Ignored columns: email"));
    }
}
