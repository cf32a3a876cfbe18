//! Workspace persistence
//!
//! The working set is saved as a JSON export and read back with identities
//! preserved, so the same validation guards it as any other import.

use std::path::Path;

use super::Storage;
use crate::error::FintrackResult;
use crate::import::IdentityPolicy;
use crate::transfer::DataTransfer;

/// Load the workspace; a missing file means an empty workspace
pub fn load_workspace<P: AsRef<Path>>(path: P) -> FintrackResult<Storage> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No workspace yet");
        return Ok(Storage::new());
    }

    let result = DataTransfer::new(IdentityPolicy::Preserve).import_from_json(path)?;
    Storage::from_snapshot(result.into_snapshot())
}

/// Save the workspace atomically
pub fn save_workspace<P: AsRef<Path>>(storage: &Storage, path: P) -> FintrackResult<()> {
    let snapshot = storage.snapshot()?;
    DataTransfer::new(IdentityPolicy::Preserve).export_to_file(
        path,
        &snapshot.accounts,
        &snapshot.categories,
        &snapshot.operations,
    )
}
