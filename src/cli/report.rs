//! CLI command for the spending report
//!
//! Loads a customer CSV, applies the city/gender selection and either
//! prints the terminal report or exports it.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::activity::ActivityLogger;
use crate::config::{ExportFormat, Settings};
use crate::display::format_load_summary;
use crate::error::{DashboardError, DashboardResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml};
use crate::models::{Dataset, FilterSelection};
use crate::reports::ReportOptions;
use crate::services::{CsvLoader, DashboardService, Logged};

/// Output format for `spendboard report`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Terminal,
    Csv,
    Json,
    Yaml,
}

impl OutputFormat {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Terminal => None,
            OutputFormat::Csv => Some(ExportFormat::Csv),
            OutputFormat::Json => Some(ExportFormat::Json),
            OutputFormat::Yaml => Some(ExportFormat::Yaml),
        }
    }
}

/// Arguments for `spendboard report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Customer CSV file
    pub file: PathBuf,

    /// City to include (repeatable; default: all cities)
    #[arg(short, long = "city", value_name = "CITY")]
    pub cities: Vec<String>,

    /// Gender to include (repeatable; default: all genders)
    #[arg(short, long = "gender", value_name = "GENDER")]
    pub genders: Vec<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (default: terminal, or inferred from --output)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of customers in the top-N table
    #[arg(long)]
    pub top: Option<usize>,

    /// Number of histogram bins
    #[arg(long)]
    pub bins: Option<usize>,

    /// Field delimiter of the CSV file
    #[arg(long, default_value = ",")]
    pub delimiter: char,
}

/// Build the dashboard service shared by the file-based commands
pub(crate) fn build_service(
    settings: &Settings,
    logger: ActivityLogger,
    delimiter: char,
    top: Option<usize>,
    bins: Option<usize>,
) -> DashboardResult<DashboardService> {
    if !delimiter.is_ascii() {
        return Err(DashboardError::Validation(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            delimiter
        )));
    }

    let mut options = ReportOptions::from(settings);
    if let Some(top) = top {
        options.top_n = top;
    }
    if let Some(bins) = bins {
        options.histogram_bins = bins;
    }
    if options.top_n == 0 {
        return Err(DashboardError::Validation("--top must be at least 1".into()));
    }
    if options.histogram_bins == 0 {
        return Err(DashboardError::Validation("--bins must be at least 1".into()));
    }

    let loader = CsvLoader::new().with_delimiter(delimiter as u8);
    Ok(DashboardService::new(logger, options).with_loader(loader))
}

/// Unwrap a logged step, warning on stderr when its activity entry was lost
pub(crate) fn warn_unlogged<T>(logged: Logged<T>) -> T {
    if let Some(warning) = logged.log_warning() {
        eprintln!("Warning: {}", warning);
    }
    logged.value
}

/// Resolve the requested selection; an empty list means every value
pub fn resolve_selection(
    dataset: &Dataset,
    cities: &[String],
    genders: &[String],
) -> FilterSelection {
    let pick = |requested: &[String], available: &[String]| {
        if requested.is_empty() {
            available.to_vec()
        } else {
            requested.to_vec()
        }
    };

    FilterSelection::new(
        pick(cities, dataset.cities()),
        pick(genders, dataset.genders()),
    )
}

/// Values requested on the command line that never occur in the data
fn unknown_values<'a>(requested: &'a [String], available: &[String]) -> Vec<&'a str> {
    requested
        .iter()
        .filter(|value| !available.contains(value))
        .map(String::as_str)
        .collect()
}

/// Handle `spendboard report`
pub fn handle_report_command(
    settings: &Settings,
    logger: ActivityLogger,
    args: ReportArgs,
) -> DashboardResult<()> {
    let service = build_service(settings, logger, args.delimiter, args.top, args.bins)?;
    let open = warn_unlogged(service.open(&args.file)?);
    let dataset = &open.loaded.dataset;

    let format = args.format.unwrap_or_else(|| match &args.output {
        Some(path) => match ExportFormat::from_path(path).unwrap_or(settings.default_export_format)
        {
            ExportFormat::Csv => OutputFormat::Csv,
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Yaml => OutputFormat::Yaml,
        },
        None => OutputFormat::Terminal,
    });

    // Only the terminal report shares stdout with the load summary
    let summary = format_load_summary(&open.source, &open.loaded.summary);
    if format == OutputFormat::Terminal && args.output.is_none() {
        println!("{}", summary);
    } else {
        eprint!("{}", summary);
    }

    for city in unknown_values(&args.cities, dataset.cities()) {
        eprintln!("Warning: city '{}' does not occur in the data", city);
    }
    for gender in unknown_values(&args.genders, dataset.genders()) {
        eprintln!("Warning: gender '{}' does not occur in the data", gender);
    }

    let filter = resolve_selection(dataset, &args.cities, &args.genders);
    let report = service.report(&open, &filter);
    if let Err(e) = service.record_report(&open, &report) {
        eprintln!("Warning: activity log not updated: {}", e);
    }

    match (format.export_format(), args.output) {
        (None, None) => {
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
        (None, Some(path)) => {
            std::fs::write(&path, report.format_terminal(&settings.currency_symbol)).map_err(
                |e| DashboardError::Export(format!("Failed to write {}: {}", path.display(), e)),
            )?;
            println!("Report written to: {}", path.display());
        }
        (Some(export_format), Some(path)) => {
            warn_unlogged(service.export(&open, &report, export_format, &path)?);
            println!(
                "Exported {} report to: {}",
                export_format.extension().to_uppercase(),
                path.display()
            );
        }
        (Some(export_format), None) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let source = Some(open.source.clone());
            match export_format {
                ExportFormat::Csv => export_report_csv(&report, &mut handle)?,
                ExportFormat::Json => export_report_json(&report, source, &mut handle, true)?,
                ExportFormat::Yaml => export_report_yaml(&report, source, &mut handle)?,
            }
            writeln!(handle)?;
        }
    }

    Ok(())
}
