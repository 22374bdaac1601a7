//! Status bar view
//!
//! Shows the selection size, the active chart and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    match &app.report {
        Some(report) => {
            let color = if report.is_empty() {
                Color::Red
            } else {
                Color::Green
            };
            spans.push(Span::styled(" Rows: ", Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!("{}/{}", report.selected_rows, report.total_rows),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                app.chart_tab.title(),
                Style::default().fg(Color::Cyan),
            ));
        }
        None => {
            spans.push(Span::styled(
                " No file loaded",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " q:Quit  ?:Help  o:Open  e:Export ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));

    frame.render_widget(paragraph, area);
}
