//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: filter sidebar, dashboard panel,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (city and gender filters)
    pub sidebar: Rect,
    /// Dashboard area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30), // Sidebar (fixed width)
                Constraint::Min(40),    // Dashboard
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title/header area
    pub header: Rect,
    /// City multi-select
    pub cities: Rect,
    /// Gender multi-select
    pub genders: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout; the gender list gets room for its items
    pub fn new(area: Rect, gender_count: usize) -> Self {
        let genders_height = (gender_count as u16 + 2).clamp(4, 8);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // Header
                Constraint::Min(5),                 // Cities
                Constraint::Length(genders_height), // Genders
            ])
            .split(area);

        Self {
            header: chunks[0],
            cities: chunks[1],
            genders: chunks[2],
        }
    }
}

/// Layout for the dashboard panel
pub struct MainPanelLayout {
    /// Key metrics row
    pub metrics: Rect,
    /// Chart tab bar
    pub tabs: Rect,
    /// Chart area
    pub chart: Rect,
}

impl MainPanelLayout {
    /// Calculate dashboard layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Metrics
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Chart
            ])
            .split(area);

        Self {
            metrics: chunks[0],
            tabs: chunks[1],
            chart: chunks[2],
        }
    }

    /// Split the metrics row into three equal cards
    pub fn metric_cards(&self) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(self.metrics);
        [chunks[0], chunks[1], chunks[2]]
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
