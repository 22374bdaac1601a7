//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, ChartTab};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, _app: &mut App) {
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("o", "Open a CSV file"),
        key_line("e", "Export the current report"),
        key_line("Tab", "Next panel (cities, genders, charts)"),
        key_line("Esc", "Clear status message"),
        Line::from(""),
        heading("Filters"),
        Line::from(""),
        key_line("j/k", "Move cursor down/up"),
        key_line("Space/Enter", "Toggle value"),
        key_line("a", "Select all (both lists from charts)"),
        key_line("n", "Select none (both lists from charts)"),
        Line::from(""),
        heading("Charts"),
        Line::from(""),
    ];

    for (i, tab) in ChartTab::ALL.iter().enumerate() {
        lines.push(key_line(&(i + 1).to_string(), tab.title()));
    }
    lines.push(key_line("[ / ]", "Previous/next chart"));
    lines.push(key_line("j/k", "Scroll tables (charts focused)"));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_chart() {
        let text: Vec<String> = help_lines().iter().map(|l| l.to_string()).collect();
        for tab in ChartTab::ALL {
            assert!(text.iter().any(|line| line.contains(tab.title())));
        }
    }
}
