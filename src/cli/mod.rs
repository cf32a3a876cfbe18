//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod category;
pub mod operation;
pub mod report;
pub mod transfer;

pub use account::{handle_account_command, AccountCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use operation::{handle_operation_command, OperationCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transfer::{handle_config_command, handle_export_command, handle_import_command};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{FintrackError, FintrackResult};
use crate::import::tokens::{parse_datetime, parse_decimal};
use crate::models::OperationKind;

/// Parse a money amount given on the command line
pub fn parse_amount(s: &str) -> FintrackResult<Decimal> {
    parse_decimal(s).map_err(|e| {
        FintrackError::InvalidArgument(format!(
            "{}. Use a format like '25.00' or '25'",
            e
        ))
    })
}

/// Parse an income/expense argument
pub fn parse_kind(s: &str) -> FintrackResult<OperationKind> {
    OperationKind::parse(s).ok_or_else(|| {
        FintrackError::InvalidArgument(format!(
            "Invalid type: '{}'. Valid types: income, expense",
            s
        ))
    })
}

/// Parse a date or timestamp argument
///
/// A bare date used as the end of a range covers that whole day.
pub fn parse_date(s: &str, end_of_day: bool) -> FintrackResult<NaiveDateTime> {
    let date = parse_datetime(s).map_err(|e| {
        FintrackError::InvalidArgument(format!("{}. Use YYYY-MM-DD or YYYY-MM-DD HH:MM:SS", e))
    })?;

    if end_of_day && !s.trim().contains([' ', 'T']) {
        if let Some(end) = date.date().and_hms_opt(23, 59, 59) {
            return Ok(end);
        }
    }
    Ok(date)
}
