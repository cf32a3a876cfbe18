//! Category CLI commands

use clap::Subcommand;

use super::parse_kind;
use crate::display::format_category_list;
use crate::error::FintrackResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Category type (income or expense)
        #[arg(short, long)]
        kind: String,
    },
    /// List categories
    List {
        /// Only show one type (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Delete a category that has no operations
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FintrackResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add { name, kind } => {
            let kind = parse_kind(&kind)?;
            let category = service.create(&name, kind)?;

            println!("Created category: {} ({})", category.name, category.kind);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List { kind } => {
            let categories = match kind {
                Some(kind) => service.list_by_kind(parse_kind(&kind)?)?,
                None => service.list()?,
            };
            println!("{}", format_category_list(&categories).trim_end());
        }

        CategoryCommands::Delete { category } => {
            let deleted = service.delete(&category)?;
            println!("Deleted category: {}", deleted.name);
        }
    }

    Ok(())
}
