//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::FintrackError;

/// Read a whole text file, failing with `FileNotFound` if it does not exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, FintrackError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FintrackError::FileNotFound(path.to_path_buf()));
    }

    fs::read_to_string(path)
        .map_err(|e| FintrackError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The destination is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), FintrackError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FintrackError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file lives next to the target so the rename stays on one filesystem
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| FintrackError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| FintrackError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FintrackError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FintrackError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FintrackError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
