//! CLI command listing the filter options of a dataset

use std::path::PathBuf;

use clap::Args;

use crate::activity::ActivityLogger;
use crate::config::Settings;
use crate::display::{format_load_summary, option_table};
use crate::error::DashboardResult;

use super::report::{build_service, warn_unlogged};

/// Arguments for `spendboard filters`
#[derive(Args, Debug)]
pub struct FiltersArgs {
    /// Customer CSV file
    pub file: PathBuf,

    /// Field delimiter of the CSV file
    #[arg(long, default_value = ",")]
    pub delimiter: char,
}

/// Handle `spendboard filters`
pub fn handle_filters_command(
    settings: &Settings,
    logger: ActivityLogger,
    args: FiltersArgs,
) -> DashboardResult<()> {
    let service = build_service(settings, logger, args.delimiter, None, None)?;
    let open = warn_unlogged(service.open(&args.file)?);
    let dataset = &open.loaded.dataset;

    println!("{}", format_load_summary(&open.source, &open.loaded.summary));
    println!("{}", option_table("City", dataset.city_counts()));
    println!();
    println!("{}", option_table("Gender", dataset.gender_counts()));

    Ok(())
}
