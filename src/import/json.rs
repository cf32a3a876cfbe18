//! JSON import
//!
//! Accepts the document written by the JSON exporter and the looser shapes
//! older exporters produced: integer operation types, numeric amounts, and
//! snake_case reference fields. Unknown fields are ignored.

use serde::Deserialize;

use super::staged::{record_label, StagedAccount, StagedCategory, StagedOperation, StagedSnapshot};
use super::tokens::{id_token, kind_from_index, parse_datetime, parse_decimal, parse_kind};
use crate::error::{FintrackError, FintrackResult};
use crate::models::OperationKind;
use rust_decimal::Decimal;

/// A string or a number, as found in loosely typed documents
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }

    fn decimal(&self) -> Result<Decimal, String> {
        parse_decimal(&self.as_text())
    }

    fn kind(&self) -> Result<OperationKind, String> {
        match self {
            Self::Text(s) => parse_kind(s),
            Self::Number(n) => match n.as_i64() {
                Some(index) => kind_from_index(index),
                None => Err(format!("invalid operation type '{}'", n)),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImportDocument {
    #[serde(default)]
    accounts: Vec<RawAccount>,
    #[serde(default)]
    categories: Vec<RawCategory>,
    #[serde(default)]
    operations: Vec<RawOperation>,
}

#[derive(Debug, Deserialize)]
struct RawAccount {
    #[serde(default)]
    id: Option<Scalar>,
    name: String,
    balance: Scalar,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(default)]
    id: Option<Scalar>,
    name: String,
    #[serde(rename = "type")]
    kind: Scalar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperation {
    #[serde(default)]
    id: Option<Scalar>,
    #[serde(rename = "type")]
    kind: Scalar,
    #[serde(alias = "bank_account_id")]
    bank_account_id: Scalar,
    amount: Scalar,
    date: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(alias = "category_id")]
    category_id: Scalar,
}

fn token(id: &Option<Scalar>) -> Option<String> {
    id.as_ref().and_then(|s| id_token(&s.as_text()))
}

/// Decode a JSON payload into a staged snapshot
pub fn decode(text: &str) -> FintrackResult<StagedSnapshot> {
    let document: ImportDocument = serde_json::from_str(text).map_err(|e| {
        if e.line() > 0 {
            FintrackError::parse_at(e.line() as u64, e.to_string())
        } else {
            FintrackError::parse(e.to_string())
        }
    })?;

    let mut staged = StagedSnapshot::new();

    for (index, raw) in document.accounts.into_iter().enumerate() {
        let id = token(&raw.id);
        let at = |message: String| {
            FintrackError::parse(format!("account {}: {}", record_label(&id, index), message))
        };
        staged.accounts.push(StagedAccount {
            balance: raw.balance.decimal().map_err(at)?,
            name: raw.name,
            id,
        });
    }

    for (index, raw) in document.categories.into_iter().enumerate() {
        let id = token(&raw.id);
        let at = |message: String| {
            FintrackError::parse(format!("category {}: {}", record_label(&id, index), message))
        };
        staged.categories.push(StagedCategory {
            kind: raw.kind.kind().map_err(at)?,
            name: raw.name,
            id,
        });
    }

    for (index, raw) in document.operations.into_iter().enumerate() {
        let id = token(&raw.id);
        let at = |message: String| {
            FintrackError::parse(format!("operation {}: {}", record_label(&id, index), message))
        };
        let account_ref = id_token(&raw.bank_account_id.as_text())
            .ok_or_else(|| at("missing account reference".to_string()))?;
        let category_ref = id_token(&raw.category_id.as_text())
            .ok_or_else(|| at("missing category reference".to_string()))?;

        staged.operations.push(StagedOperation {
            kind: raw.kind.kind().map_err(at)?,
            account_ref,
            category_ref,
            amount: raw.amount.decimal().map_err(at)?,
            date: parse_datetime(&raw.date).map_err(at)?,
            description: raw.description,
            id,
        });
    }

    Ok(staged)
}
