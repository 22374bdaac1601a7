//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every change to the filter selection recomputes the report.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::ExportFormat;
use crate::models::FilterSelection;
use crate::reports::SpendingReport;
use crate::services::{DashboardService, OpenDataset};

use super::widgets::TextInput;

/// Chart shown in the dashboard panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTab {
    #[default]
    CityAverage,
    GenderShare,
    Histogram,
    Spread,
    AgeScatter,
    TopCustomers,
    AgeCategories,
}

impl ChartTab {
    pub const ALL: [ChartTab; 7] = [
        ChartTab::CityAverage,
        ChartTab::GenderShare,
        ChartTab::Histogram,
        ChartTab::Spread,
        ChartTab::AgeScatter,
        ChartTab::TopCustomers,
        ChartTab::AgeCategories,
    ];

    /// Short title used in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            ChartTab::CityAverage => "City Avg",
            ChartTab::GenderShare => "Gender",
            ChartTab::Histogram => "Histogram",
            ChartTab::Spread => "Spread",
            ChartTab::AgeScatter => "Age vs Spend",
            ChartTab::TopCustomers => "Top N",
            ChartTab::AgeCategories => "Age Groups",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Tab bound to a digit key `1`-`7`
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Cities,
    Genders,
    Charts,
}

impl FocusedPanel {
    pub fn next(&self) -> Self {
        match self {
            FocusedPanel::Cities => FocusedPanel::Genders,
            FocusedPanel::Genders => FocusedPanel::Charts,
            FocusedPanel::Charts => FocusedPanel::Cities,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FocusedPanel::Cities => FocusedPanel::Charts,
            FocusedPanel::Genders => FocusedPanel::Cities,
            FocusedPanel::Charts => FocusedPanel::Genders,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    OpenFile,
}

/// Main application state
pub struct App {
    /// Load/report/export pipeline
    pub service: DashboardService,

    /// Currency symbol for metrics and tables
    pub currency: String,

    /// Where `e` writes exports
    pub export_dir: PathBuf,

    /// Format used by `e`
    pub export_format: ExportFormat,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Loaded dataset, if any
    pub dataset: Option<OpenDataset>,

    /// Current city/gender selection
    pub filter: FilterSelection,

    /// Report for the current selection
    pub report: Option<SpendingReport>,

    /// Chart being shown
    pub chart_tab: ChartTab,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Cursor in the city list
    pub selected_city_index: usize,

    /// Cursor in the gender list
    pub selected_gender_index: usize,

    /// Scroll offset for table charts
    pub scroll_offset: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Path input of the open-file dialog
    pub file_input: TextInput,
}

impl App {
    /// Create a new App instance with no dataset
    pub fn new(service: DashboardService, currency: impl Into<String>, export_dir: PathBuf) -> Self {
        Self {
            service,
            currency: currency.into(),
            export_dir,
            export_format: ExportFormat::default(),
            should_quit: false,
            dataset: None,
            filter: FilterSelection::default(),
            report: None,
            chart_tab: ChartTab::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_city_index: 0,
            selected_gender_index: 0,
            scroll_offset: 0,
            status_message: None,
            file_input: TextInput::new()
                .label("File")
                .placeholder("path/to/customers.csv"),
        }
    }

    /// Set the export format used by `e`
    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = format;
        self
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn cities(&self) -> &[String] {
        self.dataset
            .as_ref()
            .map(|d| d.loaded.dataset.cities())
            .unwrap_or(&[])
    }

    pub fn genders(&self) -> &[String] {
        self.dataset
            .as_ref()
            .map(|d| d.loaded.dataset.genders())
            .unwrap_or(&[])
    }

    /// Load a CSV file; failures are reported in the status bar
    pub fn open_file(&mut self, path: &Path) {
        match self.service.open(path) {
            Ok(logged) => {
                let warning = logged.log_warning();
                let open = logged.value;
                let coerced = open.loaded.summary.coerced_nulls();
                let mut message = format!("Loaded {} customers from {}", open.total_rows(), open.source);
                if coerced > 0 {
                    message.push_str(&format!(" ({} values coerced to null)", coerced));
                }
                if let Some(warning) = warning {
                    message.push_str(&format!(" | Warning: {}", warning));
                }
                self.set_dataset(open);
                self.set_status(message);
            }
            Err(e) => {
                self.set_status(format!("Error: {}", e));
            }
        }
    }

    /// Replace the dataset and select every city and gender
    pub fn set_dataset(&mut self, open: OpenDataset) {
        self.filter = open.loaded.dataset.default_selection();
        self.dataset = Some(open);
        self.selected_city_index = 0;
        self.selected_gender_index = 0;
        self.scroll_offset = 0;
        self.recompute();
    }

    /// Recompute the report for the current selection
    ///
    /// Filter changes are not written to the activity log; loads and
    /// exports are.
    pub fn recompute(&mut self) {
        self.report = self
            .dataset
            .as_ref()
            .map(|open| self.service.report(open, &self.filter));
    }

    /// Toggle the item under the cursor in the focused list
    pub fn toggle_selected(&mut self) {
        match self.focused_panel {
            FocusedPanel::Cities => {
                if let Some(city) = self.cities().get(self.selected_city_index).cloned() {
                    self.filter.toggle_city(&city);
                    self.recompute();
                }
            }
            FocusedPanel::Genders => {
                if let Some(gender) = self.genders().get(self.selected_gender_index).cloned() {
                    self.filter.toggle_gender(&gender);
                    self.recompute();
                }
            }
            FocusedPanel::Charts => {}
        }
    }

    /// Select every value of the focused list (both lists from the chart panel)
    pub fn select_all(&mut self) {
        let cities = self.cities().to_vec();
        let genders = self.genders().to_vec();
        match self.focused_panel {
            FocusedPanel::Cities => self.filter.cities = cities,
            FocusedPanel::Genders => self.filter.genders = genders,
            FocusedPanel::Charts => self.filter = FilterSelection::new(cities, genders),
        }
        self.recompute();
    }

    /// Clear the focused list (both lists from the chart panel)
    pub fn select_none(&mut self) {
        match self.focused_panel {
            FocusedPanel::Cities => self.filter.cities.clear(),
            FocusedPanel::Genders => self.filter.genders.clear(),
            FocusedPanel::Charts => self.filter = FilterSelection::default(),
        }
        self.recompute();
    }

    /// Move the cursor up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Cities => {
                self.selected_city_index = self.selected_city_index.saturating_sub(1);
            }
            FocusedPanel::Genders => {
                self.selected_gender_index = self.selected_gender_index.saturating_sub(1);
            }
            FocusedPanel::Charts => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
        }
    }

    /// Move the cursor down in the focused panel
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Cities => {
                if self.selected_city_index + 1 < self.cities().len() {
                    self.selected_city_index += 1;
                }
            }
            FocusedPanel::Genders => {
                if self.selected_gender_index + 1 < self.genders().len() {
                    self.selected_gender_index += 1;
                }
            }
            FocusedPanel::Charts => {
                self.scroll_offset += 1;
            }
        }
    }

    /// Switch the chart tab
    pub fn set_chart_tab(&mut self, tab: ChartTab) {
        self.chart_tab = tab;
        self.scroll_offset = 0;
    }

    pub fn next_panel(&mut self) {
        self.focused_panel = self.focused_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.focused_panel = self.focused_panel.prev();
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::OpenFile {
            let current = self
                .dataset
                .as_ref()
                .map(|d| d.source.clone())
                .unwrap_or_default();
            self.file_input = std::mem::take(&mut self.file_input)
                .content(current)
                .focused(true);
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
        self.file_input.focused = false;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Load the path typed into the open-file dialog
    pub fn submit_open_file(&mut self) {
        let path = self.file_input.value().trim().to_string();
        if path.is_empty() {
            self.set_status("Enter a path to a CSV file");
            return;
        }
        self.close_dialog();
        self.open_file(Path::new(&path));
    }

    /// Export the current report into the export directory
    pub fn export_report(&mut self) {
        let (Some(open), Some(report)) = (&self.dataset, &self.report) else {
            self.set_status("Nothing to export: no file loaded");
            return;
        };

        let file_name = format!(
            "spendboard-report-{}.{}",
            Local::now().format("%Y%m%d-%H%M%S"),
            self.export_format.extension()
        );
        let path = self.export_dir.join(file_name);

        let message = match self.service.export(open, report, self.export_format, &path) {
            Ok(logged) => match logged.log_warning() {
                Some(warning) => format!("Exported report to {} | Warning: {}", path.display(), warning),
                None => format!("Exported report to {}", path.display()),
            },
            Err(e) => format!("Error: {}", e),
        };
        self.set_status(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityLogger;
    use crate::reports::ReportOptions;
    use tempfile::TempDir;

    const CSV: &str = "customer_id,age,city,gender,purchases,avg_order_value\n\
                       1,25,NY,F,2,50\n\
                       2,40,LA,M,1,30\n\
                       3,70,NY,M,4,25\n";

    fn app_with_data() -> (App, TempDir) {
        let temp = TempDir::new().unwrap();
        let csv_path = temp.path().join("customers.csv");
        std::fs::write(&csv_path, CSV).unwrap();

        let logger = ActivityLogger::new(temp.path().join("activity.log"));
        let service = DashboardService::new(logger, ReportOptions::default());
        let mut app = App::new(service, "$", temp.path().join("exports"));
        app.open_file(&csv_path);
        (app, temp)
    }

    #[test]
    fn test_open_file_selects_everything() {
        let (app, _temp) = app_with_data();

        assert_eq!(app.filter.cities, vec!["NY".to_string(), "LA".to_string()]);
        assert_eq!(app.filter.genders, vec!["F".to_string(), "M".to_string()]);
        let report = app.report.as_ref().unwrap();
        assert_eq!(report.selected_rows, 3);
        assert_eq!(report.metrics.total_revenue, 230.0);
    }

    #[test]
    fn test_open_missing_file_sets_status() {
        let temp = TempDir::new().unwrap();
        let logger = ActivityLogger::new(temp.path().join("activity.log"));
        let service = DashboardService::new(logger, ReportOptions::default());
        let mut app = App::new(service, "$", temp.path().to_path_buf());

        app.open_file(&temp.path().join("missing.csv"));

        assert!(app.dataset.is_none());
        assert!(app.report.is_none());
        assert!(app.status_message.as_deref().unwrap().starts_with("Error"));
    }

    #[test]
    fn test_unwritable_log_still_loads() {
        let temp = TempDir::new().unwrap();
        let csv_path = temp.path().join("customers.csv");
        std::fs::write(&csv_path, CSV).unwrap();
        let log_dir = temp.path().join("activity.log");
        std::fs::create_dir(&log_dir).unwrap();

        let service = DashboardService::new(ActivityLogger::new(log_dir), ReportOptions::default());
        let mut app = App::new(service, "$", temp.path().join("exports"));
        app.open_file(&csv_path);

        assert!(app.dataset.is_some());
        assert_eq!(app.report.as_ref().unwrap().selected_rows, 3);
        let status = app.status_message.as_deref().unwrap();
        assert!(status.starts_with("Loaded 3 customers"));
        assert!(status.contains("activity log not updated"));
    }

    #[test]
    fn test_filter_changes_are_not_logged() {
        let (mut app, _temp) = app_with_data();

        app.focused_panel = FocusedPanel::Cities;
        app.toggle_selected();
        app.toggle_selected();
        app.select_none();
        app.select_all();

        let entries = app.service.logger().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, crate::activity::Operation::Load);
    }

    #[test]
    fn test_toggle_city_recomputes() {
        let (mut app, _temp) = app_with_data();

        app.focused_panel = FocusedPanel::Cities;
        app.toggle_selected();

        let report = app.report.as_ref().unwrap();
        assert_eq!(app.filter.cities, vec!["LA".to_string()]);
        assert_eq!(report.selected_rows, 1);
        assert_eq!(report.metrics.total_revenue, 30.0);
    }

    #[test]
    fn test_select_none_gives_empty_report() {
        let (mut app, _temp) = app_with_data();

        app.focused_panel = FocusedPanel::Genders;
        app.select_none();

        let report = app.report.as_ref().unwrap();
        assert!(report.is_empty());
        assert_eq!(report.metrics.total_revenue, 0.0);

        app.select_all();
        assert_eq!(app.report.as_ref().unwrap().selected_rows, 3);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let (mut app, _temp) = app_with_data();

        app.focused_panel = FocusedPanel::Genders;
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_gender_index, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_gender_index, 0);
    }

    #[test]
    fn test_chart_tab_navigation() {
        assert_eq!(ChartTab::from_digit('1'), Some(ChartTab::CityAverage));
        assert_eq!(ChartTab::from_digit('7'), Some(ChartTab::AgeCategories));
        assert_eq!(ChartTab::from_digit('0'), None);
        assert_eq!(ChartTab::from_digit('8'), None);
        assert_eq!(ChartTab::CityAverage.prev(), ChartTab::AgeCategories);
        assert_eq!(ChartTab::AgeCategories.next(), ChartTab::CityAverage);
    }

    #[test]
    fn test_open_file_dialog_prefills_source() {
        let (mut app, _temp) = app_with_data();

        app.open_dialog(ActiveDialog::OpenFile);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.file_input.value().ends_with("customers.csv"));

        app.close_dialog();
        assert!(!app.has_dialog());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_export_report_writes_file() {
        let (mut app, temp) = app_with_data();
        app = app.with_export_format(ExportFormat::Json);

        app.export_report();

        let exports: Vec<_> = std::fs::read_dir(temp.path().join("exports"))
            .unwrap()
            .collect();
        assert_eq!(exports.len(), 1);
        assert!(app.status_message.as_deref().unwrap().starts_with("Exported"));
    }
}
