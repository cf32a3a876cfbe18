//! Import validation rules
//!
//! Runs over a whole staged snapshot before anything is materialized. The
//! first violation aborts the import.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::staged::{record_label, StagedSnapshot};
use crate::error::{FintrackError, FintrackResult};

/// Check every staged record and every operation reference
pub fn validate(staged: &StagedSnapshot) -> FintrackResult<()> {
    let mut account_ids = HashSet::new();
    for (index, account) in staged.accounts.iter().enumerate() {
        let label = record_label(&account.id, index);

        if account.name.trim().is_empty() {
            return Err(FintrackError::validation("Account", label, "name is empty"));
        }
        if account.balance < Decimal::ZERO {
            return Err(FintrackError::validation(
                "Account",
                label,
                format!("negative balance {}", account.balance),
            ));
        }
        if let Some(id) = &account.id {
            if !account_ids.insert(id.as_str()) {
                return Err(FintrackError::validation("Account", label, "duplicate id"));
            }
        }
    }

    let mut category_ids = HashSet::new();
    for (index, category) in staged.categories.iter().enumerate() {
        let label = record_label(&category.id, index);

        if category.name.trim().is_empty() {
            return Err(FintrackError::validation("Category", label, "name is empty"));
        }
        if let Some(id) = &category.id {
            if !category_ids.insert(id.as_str()) {
                return Err(FintrackError::validation("Category", label, "duplicate id"));
            }
        }
    }

    let mut operation_ids = HashSet::new();
    for (index, operation) in staged.operations.iter().enumerate() {
        let label = record_label(&operation.id, index);

        if operation.amount <= Decimal::ZERO {
            return Err(FintrackError::validation(
                "Operation",
                label,
                format!("amount must be positive, got {}", operation.amount),
            ));
        }
        if !account_ids.contains(operation.account_ref.as_str()) {
            return Err(FintrackError::validation(
                "Operation",
                label,
                format!("unknown account {}", operation.account_ref),
            ));
        }
        if !category_ids.contains(operation.category_ref.as_str()) {
            return Err(FintrackError::validation(
                "Operation",
                label,
                format!("unknown category {}", operation.category_ref),
            ));
        }
        if let Some(id) = &operation.id {
            if !operation_ids.insert(id.as_str()) {
                return Err(FintrackError::validation("Operation", label, "duplicate id"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::staged::{StagedAccount, StagedCategory, StagedOperation};
    use crate::models::OperationKind;
    use chrono::NaiveDate;

    fn valid_snapshot() -> StagedSnapshot {
        StagedSnapshot {
            accounts: vec![StagedAccount {
                id: Some("a1".into()),
                name: "Checking".into(),
                balance: Decimal::from(100),
            }],
            categories: vec![StagedCategory {
                id: Some("c1".into()),
                name: "Food".into(),
                kind: OperationKind::Expense,
            }],
            operations: vec![StagedOperation {
                id: Some("o1".into()),
                kind: OperationKind::Expense,
                account_ref: "a1".into(),
                category_ref: "c1".into(),
                amount: Decimal::from(25),
                date: NaiveDate::from_ymd_opt(2025, 1, 15)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
                description: Some("Lunch".into()),
            }],
        }
    }

    #[test]
    fn test_valid_snapshot_passes() {
        assert!(validate(&valid_snapshot()).is_ok());
        assert!(validate(&StagedSnapshot::new()).is_ok());
    }

    #[test]
    fn test_unknown_account_reference() {
        let mut staged = valid_snapshot();
        staged.operations[0].account_ref = "a9".into();

        let err = validate(&staged).unwrap_err();
        match err {
            FintrackError::Validation { entity, id, reason } => {
                assert_eq!(entity, "Operation");
                assert_eq!(id, "o1");
                assert!(reason.contains("a9"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_category_reference() {
        let mut staged = valid_snapshot();
        staged.operations[0].category_ref = "c9".into();
        assert!(validate(&staged).unwrap_err().is_validation());
    }

    #[test]
    fn test_negative_balance() {
        let mut staged = valid_snapshot();
        staged.accounts[0].balance = Decimal::from(-1);

        let err = validate(&staged).unwrap_err();
        assert!(err.to_string().contains("Account a1"));
        assert!(err.to_string().contains("negative balance"));
    }

    #[test]
    fn test_non_positive_amount() {
        let mut staged = valid_snapshot();
        staged.operations[0].amount = Decimal::ZERO;
        staged.operations[0].id = None;

        let err = validate(&staged).unwrap_err();
        assert!(matches!(err, FintrackError::Validation { ref id, .. } if id == "#1"));
    }

    #[test]
    fn test_duplicate_account_id() {
        let mut staged = valid_snapshot();
        let copy = staged.accounts[0].clone();
        staged.accounts.push(copy);
        assert!(validate(&staged).unwrap_err().is_validation());
    }

    #[test]
    fn test_blank_category_name() {
        let mut staged = valid_snapshot();
        staged.categories[0].name = "  ".into();
        assert!(validate(&staged).unwrap_err().is_validation());
    }
}
