//! Transfer snapshot
//!
//! The unit exchanged with the outside world: every account, category and
//! operation, in order.

use super::{Account, Category, Operation};

/// Three ordered sequences gathered or decoded as a whole
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub operations: Vec<Operation>,
}

impl Snapshot {
    /// Create a snapshot from its three sequences
    pub fn new(accounts: Vec<Account>, categories: Vec<Category>, operations: Vec<Operation>) -> Self {
        Self {
            accounts,
            categories,
            operations,
        }
    }

    /// Check if the snapshot holds no entities at all
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.categories.is_empty() && self.operations.is_empty()
    }

    /// Human-readable entity counts
    pub fn summary(&self) -> String {
        format!(
            "{} accounts, {} categories, {} operations",
            self.accounts.len(),
            self.categories.len(),
            self.operations.len()
        )
    }
}
