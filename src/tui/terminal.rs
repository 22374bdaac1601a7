//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, including a panic hook that
//! restores it on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;

use crate::activity::ActivityLogger;
use crate::config::{DashboardPaths, Settings};
use crate::reports::ReportOptions;
use crate::services::DashboardService;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application, optionally opening a file at startup
pub fn run_tui(settings: &Settings, paths: &DashboardPaths, file: Option<PathBuf>) -> Result<()> {
    let logger = ActivityLogger::new(paths.activity_log()).with_enabled(settings.activity_log_enabled);
    let service = DashboardService::new(logger, ReportOptions::from(settings));
    let mut app = App::new(service, settings.currency_symbol.clone(), paths.export_dir())
        .with_export_format(settings.default_export_format);

    if let Some(path) = file {
        app.open_file(&path);
    }

    let mut terminal = init_terminal()?;
    let events = EventHandler::default();

    let result = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Key(key_event) => handle_event(app, Event::Key(key_event))?,
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
