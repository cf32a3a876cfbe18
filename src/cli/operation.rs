//! Operation CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_kind};
use crate::config::Settings;
use crate::display::{format_operation_register, NameLookup};
use crate::error::FintrackResult;
use crate::services::{AccountService, OperationService};
use crate::storage::Storage;

/// Operation subcommands
#[derive(Subcommand)]
pub enum OperationCommands {
    /// Record an income or expense
    Add {
        /// Account name or ID
        account: String,
        /// Category name or ID
        category: String,
        /// Amount, always positive (e.g., "25.00")
        amount: String,
        /// Operation type; defaults to the category's type
        #[arg(short, long)]
        kind: Option<String>,
        /// Date (YYYY-MM-DD or YYYY-MM-DD HH:MM:SS); defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },
    /// List operations, oldest first
    List {
        /// Filter by account
        #[arg(short, long)]
        account: Option<String>,
    },
}

/// Handle an operation command
pub fn handle_operation_command(
    storage: &Storage,
    settings: &Settings,
    cmd: OperationCommands,
) -> FintrackResult<()> {
    let service = OperationService::new(storage);

    match cmd {
        OperationCommands::Add {
            account,
            category,
            amount,
            kind,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let date = date.as_deref().map(|d| parse_date(d, false)).transpose()?;

            let operation = service.add(&account, &category, amount, kind, date, description)?;
            println!(
                "Recorded {} of {} on {}",
                operation.kind.to_string().to_lowercase(),
                operation.amount,
                operation.date.format(&settings.date_format)
            );
            println!("  ID: {}", operation.id);
        }

        OperationCommands::List { account } => {
            let operations = match account {
                Some(account) => {
                    let account = AccountService::new(storage).require(&account)?;
                    service.list_by_account(account.id)?
                }
                None => service.list()?,
            };

            let snapshot = storage.snapshot()?;
            let names = NameLookup {
                accounts: snapshot.accounts.into_iter().map(|a| (a.id, a.name)).collect(),
                categories: snapshot
                    .categories
                    .into_iter()
                    .map(|c| (c.id, c.name))
                    .collect(),
            };

            print!(
                "{}",
                format_operation_register(&operations, &names, &settings.date_format)
            );
        }
    }

    Ok(())
}
