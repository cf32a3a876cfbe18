//! Import module for fintrack
//!
//! Every import runs the same pipeline: decode the payload into a staged
//! snapshot, validate the whole snapshot, then materialize entities under an
//! identity policy. Any failure aborts the import and nothing is returned.

pub mod csv;
pub mod json;
pub mod materialize;
pub mod staged;
pub mod tokens;
pub mod validation;

pub use materialize::{materialize, IdentityPolicy};
pub use staged::{StagedAccount, StagedCategory, StagedOperation, StagedSnapshot};
pub use validation::validate;

use crate::error::FintrackResult;
use crate::models::Snapshot;

/// Validate a decoded payload and build its entities
pub fn finish(staged: StagedSnapshot, policy: IdentityPolicy) -> FintrackResult<Snapshot> {
    validate(&staged)?;
    materialize(staged, policy)
}

/// Decode, validate and materialize a JSON payload
pub fn import_json(text: &str, policy: IdentityPolicy) -> FintrackResult<Snapshot> {
    finish(json::decode(text)?, policy)
}

/// Decode, validate and materialize a CSV payload
pub fn import_csv(text: &str, policy: IdentityPolicy) -> FintrackResult<Snapshot> {
    finish(csv::decode(text)?, policy)
}
