//! Operation service
//!
//! Records income and expense operations and applies each one to its
//! account's balance.

use chrono::{Local, NaiveDateTime, SubsecRound};
use rust_decimal::Decimal;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{create_operation, AccountId, Operation, OperationId, OperationKind};
use crate::services::{AccountService, CategoryService};
use crate::storage::Storage;

/// Service for operation management
pub struct OperationService<'a> {
    storage: &'a Storage,
}

impl<'a> OperationService<'a> {
    /// Create a new operation service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an operation against an account and category
    ///
    /// The kind defaults to the category's kind and the date to now. The
    /// account balance may not go below zero.
    pub fn add(
        &self,
        account: &str,
        category: &str,
        amount: Decimal,
        kind: Option<OperationKind>,
        date: Option<NaiveDateTime>,
        description: Option<String>,
    ) -> FintrackResult<Operation> {
        let mut account = AccountService::new(self.storage).require(account)?;
        let category = CategoryService::new(self.storage).require(category)?;

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let operation = create_operation(
            kind.unwrap_or(category.kind),
            account.id,
            amount,
            category.id,
            date.unwrap_or_else(|| Local::now().naive_local().trunc_subsecs(0)),
            description,
        )?;

        let new_balance = account.balance + operation.balance_delta();
        if new_balance < Decimal::ZERO {
            return Err(FintrackError::InvalidArgument(format!(
                "Insufficient funds in '{}': balance {}, expense {}",
                account.name, account.balance, operation.amount
            )));
        }

        account.apply_delta(operation.balance_delta());
        self.storage.operations.add(operation.clone())?;
        self.storage.accounts.update(account.clone())?;

        tracing::info!(
            id = %operation.id,
            account = %account.name,
            category = %category.name,
            kind = %operation.kind,
            amount = %operation.amount,
            "Operation recorded"
        );
        Ok(operation)
    }

    /// Get an operation by ID
    pub fn get(&self, id: OperationId) -> FintrackResult<Option<Operation>> {
        self.storage.operations.get(id)
    }

    /// Get all operations, oldest first
    pub fn list(&self) -> FintrackResult<Vec<Operation>> {
        Ok(self.storage.snapshot()?.operations)
    }

    /// Get operations for one account, oldest first
    pub fn list_by_account(&self, account_id: AccountId) -> FintrackResult<Vec<Operation>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|o| o.account_id == account_id)
            .collect())
    }
}
