use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_account_command, handle_category_command, handle_config_command,
    handle_export_command, handle_import_command, handle_operation_command,
    handle_report_command, AccountCommands, CategoryCommands, OperationCommands, ReportCommands,
};
use fintrack::config::{init_logging, FintrackPaths, Settings};
use fintrack::storage::{load_workspace, save_workspace};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker with JSON/CSV data transfer",
    long_about = "fintrack keeps bank accounts, income and expense categories, and \
                  dated operations, reports totals per period and category, and \
                  exports or imports the whole dataset as JSON or CSV."
)]
struct Cli {
    /// Directory holding config.json and workspace.json
    #[arg(long, global = true, env = "FINTRACK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Operation management commands
    #[command(subcommand, alias = "op")]
    Operation(OperationCommands),

    /// Income and expense reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export everything to a .json or .csv file
    Export {
        /// Output file path
        path: PathBuf,
    },

    /// Import a .json or .csv file into the workspace
    Import {
        /// Input file path
        path: PathBuf,
        /// Keep the identities written in the file
        #[arg(long)]
        preserve_ids: bool,
    },

    /// Show current configuration and paths
    Config,
}

impl Commands {
    /// Whether the workspace must be saved afterwards
    fn mutates(&self) -> bool {
        match self {
            Commands::Account(AccountCommands::List)
            | Commands::Category(CategoryCommands::List { .. })
            | Commands::Operation(OperationCommands::List { .. })
            | Commands::Report(_)
            | Commands::Export { .. }
            | Commands::Config => false,
            Commands::Account(_)
            | Commands::Category(_)
            | Commands::Operation(_)
            | Commands::Import { .. } => true,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => FintrackPaths::with_base_dir(dir),
        None => FintrackPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings.log_level);

    let Some(command) = cli.command else {
        println!("fintrack - personal finance tracker");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        return Ok(());
    };

    let started = Instant::now();
    let workspace = paths.workspace_file();
    let storage = load_workspace(&workspace)?;
    let mutates = command.mutates();

    match command {
        Commands::Account(cmd) => handle_account_command(&storage, cmd)?,
        Commands::Category(cmd) => handle_category_command(&storage, cmd)?,
        Commands::Operation(cmd) => handle_operation_command(&storage, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Export { path } => handle_export_command(&storage, &settings, path)?,
        Commands::Import { path, preserve_ids } => {
            handle_import_command(&storage, &settings, &path, preserve_ids)?
        }
        Commands::Config => handle_config_command(&paths, &settings)?,
    }

    if mutates {
        paths.ensure_directories()?;
        save_workspace(&storage, &workspace)?;
    }

    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        saved = mutates,
        "Command finished"
    );
    Ok(())
}
