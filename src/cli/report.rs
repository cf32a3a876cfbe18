//! Report CLI commands

use clap::Subcommand;

use super::parse_date;
use crate::config::Settings;
use crate::error::FintrackResult;
use crate::reports::{CategoryReport, DateRange, SummaryReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total income, expenses and their difference
    Summary {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
    },
    /// Net amount per category
    ByCategory {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
    },
}

fn range(from: Option<String>, to: Option<String>) -> FintrackResult<DateRange> {
    Ok(DateRange::new(
        from.as_deref().map(|d| parse_date(d, false)).transpose()?,
        to.as_deref().map(|d| parse_date(d, true)).transpose()?,
    ))
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    match cmd {
        ReportCommands::Summary { from, to } => {
            let report = SummaryReport::generate(storage, range(from, to)?)?;
            print!("{}", report.format_terminal(&settings.date_format));
        }
        ReportCommands::ByCategory { from, to } => {
            let report = CategoryReport::generate(storage, range(from, to)?)?;
            print!("{}", report.format_terminal(&settings.date_format));
        }
    }

    Ok(())
}
