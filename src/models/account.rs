//! Account model
//!
//! Represents a bank account with a running balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, Identifiable};

/// A bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Checking")
    pub name: String,

    /// Current balance
    pub balance: Decimal,
}

impl Account {
    /// Replace the identity, keeping every other field
    ///
    /// Used when an import keeps the identities carried by the payload.
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = id;
        self
    }

    /// Apply a signed change to the balance
    ///
    /// The result may go negative; only creation enforces a non-negative
    /// balance.
    pub fn apply_delta(&mut self, delta: Decimal) {
        self.balance += delta;
    }
}

impl Identifiable for Account {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::factory::create_account;

    #[test]
    fn test_apply_delta() {
        let mut account = create_account("Checking", Decimal::from(100)).unwrap();
        account.apply_delta(Decimal::from(-30));
        assert_eq!(account.balance, Decimal::from(70));
        account.apply_delta(Decimal::new(1250, 2));
        assert_eq!(account.balance, Decimal::new(8250, 2));
    }

    #[test]
    fn test_with_id() {
        let account = create_account("Savings", Decimal::ZERO).unwrap();
        let id = AccountId::new();
        let moved = account.clone().with_id(id);
        assert_eq!(moved.id, id);
        assert_eq!(moved.name, account.name);
    }

    #[test]
    fn test_display() {
        let account = create_account("Wallet", Decimal::new(1050, 2)).unwrap();
        assert_eq!(format!("{}", account), "Wallet (10.50)");
    }
}
