//! Storage layer for fintrack
//!
//! Entities live in in-memory repositories. The CLI keeps its working set
//! between runs in a workspace file, which is just a JSON export read back
//! with identities preserved.

pub mod file_io;
pub mod repository;
pub mod workspace;

pub use file_io::{read_text, write_text_atomic};
pub use repository::InMemoryRepository;
pub use workspace::{load_workspace, save_workspace};

use std::collections::HashSet;

use crate::error::FintrackError;
use crate::models::{Account, Category, Operation, Snapshot};

/// Main storage coordinator that provides access to all repositories
#[derive(Default)]
pub struct Storage {
    pub accounts: InMemoryRepository<Account>,
    pub categories: InMemoryRepository<Category>,
    pub operations: InMemoryRepository<Operation>,
}

impl Storage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage holding every entity of a snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, FintrackError> {
        let storage = Self::new();
        storage.commit(snapshot)?;
        Ok(storage)
    }

    /// Gather every entity, in a deterministic order
    ///
    /// Accounts and categories are ordered by name, operations by date.
    pub fn snapshot(&self) -> Result<Snapshot, FintrackError> {
        let mut accounts = self.accounts.get_all()?;
        accounts.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });

        let mut categories = self.categories.get_all()?;
        categories.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });

        let mut operations = self.operations.get_all()?;
        operations.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        Ok(Snapshot::new(accounts, categories, operations))
    }

    /// Add every entity of an imported snapshot
    ///
    /// Nothing is added unless every incoming id is new and every account and
    /// category name is unused, compared case-insensitively.
    pub fn commit(&self, snapshot: Snapshot) -> Result<(), FintrackError> {
        self.check_conflicts(&snapshot)?;

        for account in snapshot.accounts {
            self.accounts.add(account)?;
        }
        for category in snapshot.categories {
            self.categories.add(category)?;
        }
        for operation in snapshot.operations {
            self.operations.add(operation)?;
        }
        Ok(())
    }

    fn check_conflicts(&self, snapshot: &Snapshot) -> Result<(), FintrackError> {
        let duplicate = |entity_type: &'static str, identifier: String| FintrackError::Duplicate {
            entity_type,
            identifier,
        };

        let mut names: HashSet<String> = self
            .accounts
            .get_all()?
            .iter()
            .map(|a| name_key(&a.name))
            .collect();
        for account in &snapshot.accounts {
            if self.accounts.exists(account.id)? {
                return Err(duplicate("Account", account.id.to_string()));
            }
            if !names.insert(name_key(&account.name)) {
                return Err(duplicate("Account", account.name.clone()));
            }
        }

        let mut names: HashSet<String> = self
            .categories
            .get_all()?
            .iter()
            .map(|c| name_key(&c.name))
            .collect();
        for category in &snapshot.categories {
            if self.categories.exists(category.id)? {
                return Err(duplicate("Category", category.id.to_string()));
            }
            if !names.insert(name_key(&category.name)) {
                return Err(duplicate("Category", category.name.clone()));
            }
        }

        for operation in &snapshot.operations {
            if self.operations.exists(operation.id)? {
                return Err(duplicate("Operation", operation.id.to_string()));
            }
        }

        Ok(())
    }

    /// Check if nothing has been stored yet
    pub fn is_empty(&self) -> Result<bool, FintrackError> {
        Ok(self.accounts.count()? == 0
            && self.categories.count()? == 0
            && self.operations.count()? == 0)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
