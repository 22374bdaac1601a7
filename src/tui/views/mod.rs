//! TUI Views module
//!
//! The filter sidebar, the metrics row, the chart panel and the status bar.

pub mod charts;
pub mod metrics;
pub mod sidebar;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{AppLayout, MainPanelLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    if app.report.is_some() {
        let main = MainPanelLayout::new(layout.main);
        metrics::render(frame, app, &main);
        charts::render_tabs(frame, app, main.tabs);
        charts::render(frame, app, main.chart);
    } else {
        render_no_data(frame, layout.main);
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::OpenFile => dialogs::open_file::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Placeholder shown until a CSV file is loaded
fn render_no_data(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Customer Spending Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = vec![
        Line::from(""),
        Line::from("Please open a CSV file to view the dashboard."),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press 'o' to open a file, '?' for help.",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
