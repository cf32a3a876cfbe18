//! Entity factory
//!
//! The only way to build a fresh [`Account`], [`Category`] or [`Operation`].
//! Each constructor checks its preconditions and assigns a new identity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::account::Account;
use super::category::Category;
use super::ids::{AccountId, CategoryId, OperationId};
use super::kind::OperationKind;
use super::operation::Operation;
use crate::error::{FintrackError, FintrackResult};

/// Create an account; the name must be non-blank and the balance non-negative
pub fn create_account(name: &str, balance: Decimal) -> FintrackResult<Account> {
    if name.trim().is_empty() {
        return Err(FintrackError::InvalidArgument(
            "Account name cannot be empty".into(),
        ));
    }
    if balance < Decimal::ZERO {
        return Err(FintrackError::InvalidArgument(format!(
            "Initial balance cannot be negative: {}",
            balance
        )));
    }

    Ok(Account {
        id: AccountId::new(),
        name: name.to_string(),
        balance,
    })
}

/// Create a category; the name must be non-blank
pub fn create_category(name: &str, kind: OperationKind) -> FintrackResult<Category> {
    if name.trim().is_empty() {
        return Err(FintrackError::InvalidArgument(
            "Category name cannot be empty".into(),
        ));
    }

    Ok(Category {
        id: CategoryId::new(),
        name: name.to_string(),
        kind,
    })
}

/// Create an operation; the amount must be strictly positive
pub fn create_operation(
    kind: OperationKind,
    account_id: AccountId,
    amount: Decimal,
    category_id: CategoryId,
    date: NaiveDateTime,
    description: Option<String>,
) -> FintrackResult<Operation> {
    if amount <= Decimal::ZERO {
        return Err(FintrackError::InvalidArgument(format!(
            "Amount must be positive: {}",
            amount
        )));
    }

    Ok(Operation {
        id: OperationId::new(),
        kind,
        account_id,
        category_id,
        amount,
        date,
        description,
    })
}
