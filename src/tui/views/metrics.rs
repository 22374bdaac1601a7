//! Key metrics row

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_currency, report::truncate};
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the three metric cards
pub fn render(frame: &mut Frame, app: &App, layout: &MainPanelLayout) {
    let Some(report) = &app.report else {
        return;
    };

    let average = report
        .metrics
        .average_spending
        .map(|v| format_currency(v, &app.currency))
        .unwrap_or_else(|| "n/a".to_string());
    let top = report.top_customer().unwrap_or("n/a");

    let cards = layout.metric_cards();
    render_card(
        frame,
        "Total Revenue",
        &format_currency(report.metrics.total_revenue, &app.currency),
        Color::Green,
        cards[0],
    );
    render_card(frame, "Average Spending", &average, Color::Yellow, cards[1]);
    render_card(
        frame,
        "Top Customer ID",
        &truncate(top, cards[2].width.saturating_sub(2) as usize),
        Color::Cyan,
        cards[2],
    );
}

fn render_card(frame: &mut Frame, title: &str, value: &str, color: Color, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(value.to_string())
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    frame.render_widget(paragraph, area);
}
