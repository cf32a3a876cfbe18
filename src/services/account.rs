//! Account service
//!
//! Provides business logic for account management: creation through the
//! factory, lookup by name or ID, and deletion guarded by operation references.

use rust_decimal::Decimal;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{create_account, Account, AccountId};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account
    pub fn create(&self, name: &str, balance: Decimal) -> FintrackResult<Account> {
        let name = name.trim();

        if self.get_by_name(name)?.is_some() {
            return Err(FintrackError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let account = create_account(name, balance)?;
        self.storage.accounts.add(account.clone())?;

        tracing::info!(id = %account.id, name = %account.name, "Account created");
        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> FintrackResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Get an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> FintrackResult<Option<Account>> {
        let name = name.trim().to_lowercase();
        self.storage
            .accounts
            .find(|a| a.name.to_lowercase() == name)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Account>> {
        if let Some(account) = self.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        if let Ok(id) = identifier.parse::<AccountId>() {
            return self.storage.accounts.get(id);
        }

        Ok(None)
    }

    /// Find an account or fail with a not-found error
    pub fn require(&self, identifier: &str) -> FintrackResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| FintrackError::account_not_found(identifier))
    }

    /// Get all accounts, sorted by name
    pub fn list(&self) -> FintrackResult<Vec<Account>> {
        Ok(self.storage.snapshot()?.accounts)
    }

    /// Delete an account that no operation refers to
    pub fn delete(&self, identifier: &str) -> FintrackResult<Account> {
        let account = self.require(identifier)?;

        let referenced = self
            .storage
            .operations
            .get_all()?
            .iter()
            .filter(|o| o.account_id == account.id)
            .count();
        if referenced > 0 {
            return Err(FintrackError::InvalidArgument(format!(
                "Account '{}' still has {} operations",
                account.name, referenced
            )));
        }

        self.storage.accounts.delete(account.id)?;
        tracing::info!(id = %account.id, name = %account.name, "Account deleted");
        Ok(account)
    }

    /// Total balance across all accounts
    pub fn total_balance(&self) -> FintrackResult<Decimal> {
        Ok(self
            .storage
            .accounts
            .get_all()?
            .iter()
            .map(|a| a.balance)
            .sum())
    }
}
