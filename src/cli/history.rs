//! CLI command for the activity log

use clap::Args;

use crate::activity::ActivityLogger;
use crate::error::DashboardResult;

/// Arguments for `spendboard history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `spendboard history`
pub fn handle_history_command(logger: &ActivityLogger, args: HistoryArgs) -> DashboardResult<()> {
    let entries = logger.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No activity recorded yet.");
        if !logger.is_enabled() {
            println!("Activity logging is disabled in settings.");
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_summary());
    }
    println!();
    println!("Showing {} entries from {}", entries.len(), logger.path().display());

    Ok(())
}
