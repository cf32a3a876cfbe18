//! Operation model
//!
//! Represents a dated money movement against an account, classified by a
//! category.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, Identifiable, OperationId};
use super::kind::OperationKind;

/// A single income or expense operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier
    pub id: OperationId,

    /// Income or expense; conventionally matches the category's kind
    #[serde(rename = "type")]
    pub kind: OperationKind,

    /// The account this operation moves money in or out of
    pub account_id: AccountId,

    /// The category classifying this operation
    pub category_id: CategoryId,

    /// Amount, always positive; direction comes from `kind`
    pub amount: Decimal,

    /// When the operation happened
    pub date: NaiveDateTime,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
}

impl Operation {
    /// Replace the identity, keeping every other field
    pub fn with_id(mut self, id: OperationId) -> Self {
        self.id = id;
        self
    }

    /// Point the operation at different account and category identities
    pub fn with_references(mut self, account_id: AccountId, category_id: CategoryId) -> Self {
        self.account_id = account_id;
        self.category_id = category_id;
        self
    }

    /// The signed effect of this operation on its account's balance
    pub fn balance_delta(&self) -> Decimal {
        match self.kind {
            OperationKind::Income => self.amount,
            OperationKind::Expense => -self.amount,
        }
    }

    /// Check if this is an income operation
    pub fn is_income(&self) -> bool {
        self.kind == OperationKind::Income
    }

    /// Check if this is an expense operation
    pub fn is_expense(&self) -> bool {
        self.kind == OperationKind::Expense
    }
}

impl Identifiable for Operation {
    type Id = OperationId;

    fn id(&self) -> OperationId {
        self.id
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )?;
        if let Some(description) = &self.description {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}
