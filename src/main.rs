use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendboard::activity::ActivityLogger;
use spendboard::cli::{
    handle_filters_command, handle_history_command, handle_report_command, FiltersArgs,
    HistoryArgs, ReportArgs,
};
use spendboard::config::{paths::DATA_DIR_ENV, DashboardPaths, Settings};

#[derive(Parser)]
#[command(
    name = "spendboard",
    version,
    about = "Customer spending dashboard for the terminal",
    long_about = "Spendboard loads a customer CSV file, filters it by city and gender, \
                  and reports revenue, average spending, top customers and the \
                  distribution of spending, either as text or in an interactive TUI."
)]
struct Cli {
    /// Directory for settings, the activity log and exports
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui {
        /// Customer CSV file to open at startup
        file: Option<PathBuf>,
    },

    /// Print or export the spending report for a CSV file
    Report(ReportArgs),

    /// List the cities and genders available for filtering
    Filters(FiltersArgs),

    /// Show recent activity
    History(HistoryArgs),

    /// Show current configuration and paths
    Config {
        /// Write the settings file with the current values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => DashboardPaths::with_base_dir(dir),
        None => DashboardPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let logger =
        ActivityLogger::new(paths.activity_log()).with_enabled(settings.activity_log_enabled);

    match cli.command {
        Some(Commands::Tui { file }) => {
            spendboard::tui::run_tui(&settings, &paths, file)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&settings, logger, args)?;
        }
        Some(Commands::Filters(args)) => {
            handle_filters_command(&settings, logger, args)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&logger, args)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Spendboard Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created, using defaults)" }
            );
            println!("Activity log:     {}", paths.activity_log().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Histogram bins:        {}", settings.histogram_bins);
            println!("  Top N customers:       {}", settings.top_n);
            println!("  Activity log enabled:  {}", settings.activity_log_enabled);
            println!("  Default export format: {}", settings.default_export_format);
        }
        None => {
            println!("Spendboard - customer spending dashboard");
            println!();
            println!("Run 'spendboard --help' for usage information.");
            println!("Run 'spendboard report <FILE>' to print a report.");
            println!("Run 'spendboard tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
