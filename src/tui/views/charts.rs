//! Chart panel
//!
//! One tab per dashboard chart. Bar charts use ratatui's `BarChart`, the
//! age/spending scatter uses `Chart`, and the tabular views use `Table`.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset as ChartDataset, GraphType,
        Paragraph, Row, Table, Tabs,
    },
    Frame,
};

use crate::display::report::{display_value, format_bar, format_number, truncate};
use crate::display::{format_currency, format_optional};
use crate::models::AgeCategory;
use crate::reports::{GroupValue, SpendingReport};
use crate::tui::app::{App, ChartTab, FocusedPanel};

/// Render the tab bar
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ChartTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let border_color = if app.focused_panel == FocusedPanel::Charts {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .select(app.chart_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the active chart
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.report else {
        return;
    };

    if report.is_empty() {
        render_message(frame, area, "No customers match the current filters.");
        return;
    }

    match app.chart_tab {
        ChartTab::CityAverage => render_group_bars(
            frame,
            area,
            " Average Spending by City ",
            &report.city_avg_spending,
            &app.currency,
            Color::Cyan,
        ),
        ChartTab::GenderShare => render_gender_share(frame, report, &app.currency, area),
        ChartTab::Histogram => render_histogram(frame, report, &app.currency, area),
        ChartTab::Spread => render_spread(frame, report, &app.currency, app.scroll_offset, area),
        ChartTab::AgeScatter => render_scatter(frame, report, area),
        ChartTab::TopCustomers => {
            render_top_customers(frame, report, &app.currency, app.scroll_offset, area)
        }
        ChartTab::AgeCategories => render_group_bars(
            frame,
            area,
            " Spending by Age Category ",
            &report.age_category_totals,
            &app.currency,
            Color::Magenta,
        ),
    }
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .block(chart_block(" Charts "))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Width of each bar so that `count` bars fill the area
fn bar_width(area: Rect, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let inner = area.width.saturating_sub(2) as usize;
    ((inner / count).saturating_sub(1)).clamp(1, 12) as u16
}

/// Bar chart for a key/value table
fn render_group_bars(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    groups: &[GroupValue],
    currency: &str,
    color: Color,
) {
    let valid: Vec<&GroupValue> = groups.iter().filter(|g| g.value.is_some()).collect();
    if valid.is_empty() {
        render_message(frame, area, "No spending data for the selection.");
        return;
    }

    let width = bar_width(area, valid.len());
    let bars: Vec<Bar> = valid
        .iter()
        .map(|g| {
            let value = g.value.unwrap_or(0.0);
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .text_value(format_currency(value, currency))
                .label(Line::from(truncate(&display_value(&g.key), width as usize)))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::Black).bg(color));

    frame.render_widget(chart, area);
}

/// Share of total spending per gender, drawn as proportional bars
fn render_gender_share(frame: &mut Frame, report: &SpendingReport, currency: &str, area: Rect) {
    let total: f64 = report
        .gender_total_spending
        .iter()
        .filter_map(|g| g.value)
        .sum();

    let bar_len = (area.width as usize).saturating_sub(40).clamp(10, 50);
    let mut lines = vec![Line::from("")];
    for group in &report.gender_total_spending {
        let value = group.value.unwrap_or(0.0);
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<10}", truncate(&display_value(&group.key), 10)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format_bar(value, total, bar_len),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!(" {:>5.1}%  ", share)),
            Span::styled(
                format_currency(value, currency),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(chart_block(" Total Spending by Gender "));
    frame.render_widget(paragraph, area);
}

/// Distribution of total spending
fn render_histogram(frame: &mut Frame, report: &SpendingReport, currency: &str, area: Rect) {
    let histogram = &report.spending_histogram;
    if histogram.is_empty() {
        render_message(frame, area, "No spending data for the selection.");
        return;
    }

    let width = bar_width(area, histogram.bins.len());
    let bars: Vec<Bar> = histogram
        .bins
        .iter()
        .map(|bin| {
            Bar::default()
                .value(bin.count as u64)
                .label(Line::from(truncate(
                    &format_currency(bin.lower, currency),
                    width as usize,
                )))
                .style(Style::default().fg(Color::Blue))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(" Distribution of Total Spending "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::White).bg(Color::Blue));

    frame.render_widget(chart, area);
}

/// Five-number summary per city
fn render_spread(
    frame: &mut Frame,
    report: &SpendingReport,
    currency: &str,
    offset: usize,
    area: Rect,
) {
    let header = Row::new(vec![
        "City", "n", "Min", "Q1", "Median", "Q3", "Max", "Outliers",
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let money = |v: f64| format_optional(Some(v), currency);
    let rows: Vec<Row> = report
        .city_spending_spread
        .iter()
        .skip(offset)
        .map(|s| {
            Row::new(vec![
                truncate(&display_value(&s.key), 14),
                s.count.to_string(),
                money(s.min),
                money(s.q1),
                money(s.median),
                money(s.q3),
                money(s.max),
                s.outliers.len().to_string(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(5),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(chart_block(" Spending Spread by City "));

    frame.render_widget(table, area);
}

fn category_color(category: AgeCategory) -> Color {
    match category {
        AgeCategory::Young => Color::Green,
        AgeCategory::Mid => Color::Yellow,
        AgeCategory::Senior => Color::Magenta,
        AgeCategory::Other => Color::Gray,
    }
}

/// Age against total spending, one series per age category
fn render_scatter(frame: &mut Frame, report: &SpendingReport, area: Rect) {
    let points = &report.age_vs_spending_points;
    if points.is_empty() {
        render_message(frame, area, "No rows with both age and spending.");
        return;
    }

    let series: Vec<(AgeCategory, Vec<(f64, f64)>)> = AgeCategory::ALL
        .iter()
        .map(|category| {
            let data = points
                .iter()
                .filter(|p| p.age_category == *category)
                .map(|p| (p.age, p.total_spent))
                .collect();
            (*category, data)
        })
        .filter(|(_, data): &(AgeCategory, Vec<(f64, f64)>)| !data.is_empty())
        .collect();

    let datasets: Vec<ChartDataset> = series
        .iter()
        .map(|(category, data)| {
            ChartDataset::default()
                .name(category.label())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(category_color(*category)))
                .data(data)
        })
        .collect();

    let (x_min, x_max) = padded_bounds(points.iter().map(|p| p.age));
    let (y_min, y_max) = padded_bounds(points.iter().map(|p| p.total_spent));

    let axis_labels = |min: f64, max: f64| {
        vec![
            Span::raw(format_number(min.round())),
            Span::raw(format_number(((min + max) / 2.0).round())),
            Span::raw(format_number(max.round())),
        ]
    };

    let chart = Chart::new(datasets)
        .block(chart_block(" Age vs Total Spending "))
        .x_axis(
            Axis::default()
                .title("Age")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max)),
        )
        .y_axis(
            Axis::default()
                .title("Total Spent")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(axis_labels(y_min, y_max)),
        );

    frame.render_widget(chart, area);
}

/// Min/max of the values, widened so a single point is still visible
fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad, max + pad)
}

/// Ranked top customers
fn render_top_customers(
    frame: &mut Frame,
    report: &SpendingReport,
    currency: &str,
    offset: usize,
    area: Rect,
) {
    let header = Row::new(vec!["#", "Customer", "City", "Gender", "Total Spent"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = report
        .top_customers
        .iter()
        .skip(offset)
        .map(|c| {
            Row::new(vec![
                c.rank.to_string(),
                truncate(&c.customer_id, 16),
                truncate(&display_value(&c.city), 14),
                truncate(&display_value(&c.gender), 8),
                format_optional(c.total_spent, currency),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(14),
    ];

    let title = format!(" Top {} Customers by Spending ", report.top_customers.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(chart_block(&title));

    frame.render_widget(table, area);
}
