//! Turning a validated staged snapshot into entities
//!
//! Every entity is built through the factory. The identity policy decides
//! whether source identities survive.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::staged::StagedSnapshot;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    create_account, create_category, create_operation, AccountId, CategoryId, OperationId,
    Snapshot,
};

/// How imported records get their identities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityPolicy {
    /// Fresh identities everywhere; operation references are rewired to the
    /// fresh ids of the records they pointed at
    #[default]
    Remap,
    /// Source identities are kept; tokens must be UUIDs
    Preserve,
}

impl IdentityPolicy {
    /// Parse a policy name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "remap" => Some(Self::Remap),
            "preserve" => Some(Self::Preserve),
            _ => None,
        }
    }
}

impl std::fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remap => write!(f, "remap"),
            Self::Preserve => write!(f, "preserve"),
        }
    }
}

fn preserved<T>(
    token: &Option<String>,
    entity: &str,
    parse: impl Fn(&str) -> Result<T, uuid::Error>,
) -> FintrackResult<Option<T>> {
    match token {
        Some(token) => parse(token)
            .map(Some)
            .map_err(|_| FintrackError::parse(format!("invalid {} id '{}'", entity, token))),
        None => Ok(None),
    }
}

/// Record a preserved identity, failing when another token already spelled it
///
/// Tokens such as `550e8400-...` and `550E8400-...` differ as text but parse
/// to the same UUID.
fn claim<T: Eq + Hash>(
    seen: &mut HashSet<T>,
    id: T,
    entity: &'static str,
    token: &Option<String>,
) -> FintrackResult<()> {
    if seen.insert(id) {
        Ok(())
    } else {
        let label = token.as_deref().unwrap_or_default();
        Err(FintrackError::validation(entity, label, "duplicate id"))
    }
}

/// Build entities from a staged snapshot that has already passed validation
pub fn materialize(staged: StagedSnapshot, policy: IdentityPolicy) -> FintrackResult<Snapshot> {
    let keep = policy == IdentityPolicy::Preserve;

    let mut account_map: HashMap<String, AccountId> = HashMap::new();
    let mut account_ids = HashSet::new();
    let mut accounts = Vec::with_capacity(staged.accounts.len());
    for record in staged.accounts {
        let mut account = create_account(&record.name, record.balance)?;
        if keep {
            if let Some(id) = preserved(&record.id, "account", AccountId::parse)? {
                claim(&mut account_ids, id, "Account", &record.id)?;
                account = account.with_id(id);
            }
        }
        if let Some(token) = record.id {
            account_map.insert(token, account.id);
        }
        accounts.push(account);
    }

    let mut category_map: HashMap<String, CategoryId> = HashMap::new();
    let mut category_ids = HashSet::new();
    let mut categories = Vec::with_capacity(staged.categories.len());
    for record in staged.categories {
        let mut category = create_category(&record.name, record.kind)?;
        if keep {
            if let Some(id) = preserved(&record.id, "category", CategoryId::parse)? {
                claim(&mut category_ids, id, "Category", &record.id)?;
                category = category.with_id(id);
            }
        }
        if let Some(token) = record.id {
            category_map.insert(token, category.id);
        }
        categories.push(category);
    }

    let mut operation_ids = HashSet::new();
    let mut operations = Vec::with_capacity(staged.operations.len());
    for record in staged.operations {
        let account_id = *account_map
            .get(&record.account_ref)
            .ok_or_else(|| FintrackError::account_not_found(record.account_ref.clone()))?;
        let category_id = *category_map
            .get(&record.category_ref)
            .ok_or_else(|| FintrackError::category_not_found(record.category_ref.clone()))?;

        let mut operation = create_operation(
            record.kind,
            account_id,
            record.amount,
            category_id,
            record.date,
            record.description,
        )?;
        if keep {
            if let Some(id) = preserved(&record.id, "operation", OperationId::parse)? {
                claim(&mut operation_ids, id, "Operation", &record.id)?;
                operation = operation.with_id(id);
            }
        }
        operations.push(operation);
    }

    Ok(Snapshot::new(accounts, categories, operations))
}
