//! CLI commands for export, import and configuration

use std::path::{Path, PathBuf};

use crate::config::{FintrackPaths, Settings};
use crate::error::FintrackResult;
use crate::import::IdentityPolicy;
use crate::storage::Storage;
use crate::transfer::DataTransfer;

/// Give an extension-less path the configured default format
fn export_target(path: PathBuf, settings: &Settings) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(settings.default_export_format.extension())
    }
}

/// Write every entity to a JSON or CSV file
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    path: PathBuf,
) -> FintrackResult<()> {
    let path = export_target(path, settings);
    let snapshot = storage.snapshot()?;

    DataTransfer::default().export_to_file(
        &path,
        &snapshot.accounts,
        &snapshot.categories,
        &snapshot.operations,
    )?;

    println!("Exported {} to: {}", snapshot.summary(), path.display());
    Ok(())
}

/// Read a JSON or CSV file and add its entities to the workspace
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    path: &Path,
    preserve_ids: bool,
) -> FintrackResult<()> {
    let policy = if preserve_ids {
        IdentityPolicy::Preserve
    } else {
        settings.identity_policy
    };

    let result = DataTransfer::new(policy).import_from_file(path)?;
    let message = result.message.clone();
    storage.commit(result.into_snapshot())?;

    println!("{}", message);
    Ok(())
}

/// Show current configuration and paths
pub fn handle_config_command(paths: &FintrackPaths, settings: &Settings) -> FintrackResult<()> {
    println!("fintrack configuration");
    println!("======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Workspace:      {}", paths.workspace_file().display());
    println!();
    println!("Settings:");
    println!("  Default export format: {}", settings.default_export_format.extension());
    println!("  Identity policy:       {}", settings.identity_policy);
    println!("  Log level:             {}", settings.log_level);
    println!("  Date format:           {}", settings.date_format);
    Ok(())
}
