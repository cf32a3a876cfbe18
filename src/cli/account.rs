//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use super::parse_amount;
use crate::display::format_account_list;
use crate::error::FintrackResult;
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Add {
        /// Account name
        name: String,
        /// Starting balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List all accounts
    List,
    /// Delete an account that has no operations
    Delete {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, cmd: AccountCommands) -> FintrackResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Add { name, balance } => {
            let balance = parse_amount(&balance)?;
            let account = service.create(&name, balance)?;

            println!("Created account: {}", account.name);
            println!("  Balance: {}", account.balance);
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            println!("{}", format_account_list(&accounts).trim_end());
        }

        AccountCommands::Delete { account } => {
            let deleted = service.delete(&account)?;
            println!("Deleted account: {}", deleted.name);
        }
    }

    Ok(())
}
