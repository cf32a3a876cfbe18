//! Staged import records
//!
//! Decoders produce these raw records. Nothing here has been validated yet and
//! identities are still the source file's tokens.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::OperationKind;

#[derive(Debug, Clone, PartialEq)]
pub struct StagedAccount {
    /// Identity token as written in the source, if any
    pub id: Option<String>,
    pub name: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedCategory {
    pub id: Option<String>,
    pub name: String,
    pub kind: OperationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedOperation {
    pub id: Option<String>,
    pub kind: OperationKind,
    /// Source token of the referenced account
    pub account_ref: String,
    /// Source token of the referenced category
    pub category_ref: String,
    pub amount: Decimal,
    pub date: NaiveDateTime,
    pub description: Option<String>,
}

/// Everything one payload decoded to, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedSnapshot {
    pub accounts: Vec<StagedAccount>,
    pub categories: Vec<StagedCategory>,
    pub operations: Vec<StagedOperation>,
}

impl StagedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Label used in error messages: the source token, or the 1-based position
pub fn record_label(id: &Option<String>, index: usize) -> String {
    match id {
        Some(id) => id.clone(),
        None => format!("#{}", index + 1),
    }
}
