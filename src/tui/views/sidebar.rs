//! Sidebar view
//!
//! Shows the city and gender multi-select filters

use std::collections::HashSet;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::report::{display_value, truncate};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area, app.genders().len());

    render_header(frame, app, layout.header);

    let (city_counts, gender_counts) = match &app.dataset {
        Some(open) => (
            open.loaded.dataset.city_counts(),
            open.loaded.dataset.gender_counts(),
        ),
        None => (&[][..], &[][..]),
    };

    let selected_cities: HashSet<&str> = app.filter.cities.iter().map(String::as_str).collect();
    let selected_genders: HashSet<&str> = app.filter.genders.iter().map(String::as_str).collect();

    let cities = checklist(city_counts, &selected_cities);
    let genders = checklist(gender_counts, &selected_genders);

    render_options(
        frame,
        " City ",
        &cities,
        app.selected_city_index,
        app.focused_panel == FocusedPanel::Cities,
        layout.cities,
    );
    render_options(
        frame,
        " Gender ",
        &genders,
        app.selected_gender_index,
        app.focused_panel == FocusedPanel::Genders,
        layout.genders,
    );
}

/// Pair each option and its row count with its selection state
fn checklist<'a>(
    counts: &'a [(String, usize)],
    selected: &HashSet<&str>,
) -> Vec<(&'a str, usize, bool)> {
    counts
        .iter()
        .map(|(value, count)| (value.as_str(), *count, selected.contains(value.as_str())))
        .collect()
}

/// Render sidebar header
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Spendboard ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = match &app.dataset {
        Some(open) => format!("{} rows", open.total_rows()),
        None => "no file loaded".to_string(),
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render one multi-select list with checkboxes
fn render_options(
    frame: &mut Frame,
    title: &str,
    options: &[(&str, usize, bool)],
    cursor: usize,
    is_focused: bool,
    area: Rect,
) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let selected = options.iter().filter(|(_, _, s)| *s).count();
    let block = Block::default()
        .title(format!("{}({}/{}) ", title, selected, options.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if options.is_empty() {
        let text = Paragraph::new("No values")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = options
        .iter()
        .map(|(value, count, is_selected)| {
            let (mark, style) = if *is_selected {
                ("[x] ", Style::default().fg(Color::Green))
            } else {
                ("[ ] ", Style::default().fg(Color::DarkGray))
            };

            let line = Line::from(vec![
                Span::styled(mark, style),
                Span::styled(
                    format!("{:<14}", truncate(&display_value(value), 14)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(format!("{:>5}", count), Style::default().fg(Color::DarkGray)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let mut list = List::new(items).block(block);
    if is_focused {
        list = list
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
    }

    let mut state = ListState::default();
    state.select(Some(cursor.min(options.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}
