//! Terminal User Interface module
//!
//! Interactive dashboard built on ratatui: a filter sidebar, the key
//! metrics row and one tab per chart.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
