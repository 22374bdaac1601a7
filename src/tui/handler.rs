//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, ChartTab, FocusedPanel, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => Ok(()),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('o') => app.open_dialog(ActiveDialog::OpenFile),

        KeyCode::Tab => app.next_panel(),
        KeyCode::BackTab => app.prev_panel(),

        KeyCode::Char(c @ '1'..='7') => {
            if let Some(tab) = ChartTab::from_digit(c) {
                app.set_chart_tab(tab);
            }
        }
        KeyCode::Char(']') => app.set_chart_tab(app.chart_tab.next()),
        KeyCode::Char('[') => app.set_chart_tab(app.chart_tab.prev()),
        KeyCode::Right | KeyCode::Char('l') if app.focused_panel == FocusedPanel::Charts => {
            app.set_chart_tab(app.chart_tab.next())
        }
        KeyCode::Left | KeyCode::Char('h') if app.focused_panel == FocusedPanel::Charts => {
            app.set_chart_tab(app.chart_tab.prev())
        }

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('a') => app.select_all(),
        KeyCode::Char('n') => app.select_none(),

        KeyCode::Char('e') => app.export_report(),
        KeyCode::Esc => app.clear_status(),

        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::OpenFile => handle_open_file_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in the open-file dialog
fn handle_open_file_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_open_file(),
        KeyCode::Backspace => app.file_input.backspace(),
        KeyCode::Delete => app.file_input.delete(),
        KeyCode::Left => app.file_input.move_left(),
        KeyCode::Right => app.file_input.move_right(),
        KeyCode::Home => app.file_input.move_start(),
        KeyCode::End => app.file_input.move_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.file_input.clear()
        }
        KeyCode::Char(c) => app.file_input.insert(c),
        _ => {}
    }
}
