//! Path management for fintrack
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories` (for example
//!    `~/.config/fintrack` on Linux)
//! 3. `$HOME/.config/fintrack`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FintrackError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, FintrackError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths under a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the workspace snapshot the CLI works on
    pub fn workspace_file(&self) -> PathBuf {
        self.base_dir.join("workspace.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FintrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintrackError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, FintrackError> {
    if let Some(dirs) = ProjectDirs::from("", "", "fintrack") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("fintrack"))
        .ok_or_else(|| FintrackError::Config("Could not determine home directory".into()))
}
