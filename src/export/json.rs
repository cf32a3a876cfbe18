//! JSON Export functionality
//!
//! Builds a single pretty-printed document with typed account, category and
//! operation records plus the export timestamp.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::ExportVisitor;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Account, AccountId, Category, CategoryId, Operation, OperationId, OperationKind,
};

/// Account record as it appears in the document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: AccountId,
    pub name: String,
    pub balance: Decimal,
    #[serde(rename = "type")]
    pub record_type: &'static str,
}

/// Category record as it appears in the document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub object_type: &'static str,
}

/// Operation record as it appears in the document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    pub id: OperationId,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub bank_account_id: AccountId,
    pub amount: Decimal,
    pub date: NaiveDateTime,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub object_type: &'static str,
}

/// Full export document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub accounts: Vec<AccountRecord>,
    pub categories: Vec<CategoryRecord>,
    pub operations: Vec<OperationRecord>,
    pub export_date: DateTime<Utc>,
}

/// Visitor producing the JSON document
#[derive(Debug, Default)]
pub struct JsonExportVisitor {
    accounts: Vec<AccountRecord>,
    categories: Vec<CategoryRecord>,
    operations: Vec<OperationRecord>,
}

impl JsonExportVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportVisitor for JsonExportVisitor {
    fn visit_account(&mut self, account: &Account) {
        self.accounts.push(AccountRecord {
            id: account.id,
            name: account.name.clone(),
            balance: account.balance,
            record_type: "BankAccount",
        });
    }

    fn visit_category(&mut self, category: &Category) {
        self.categories.push(CategoryRecord {
            id: category.id,
            name: category.name.clone(),
            kind: category.kind,
            object_type: "Category",
        });
    }

    fn visit_operation(&mut self, operation: &Operation) {
        self.operations.push(OperationRecord {
            id: operation.id,
            kind: operation.kind,
            bank_account_id: operation.account_id,
            amount: operation.amount,
            date: operation.date,
            description: operation.description.clone(),
            category_id: operation.category_id,
            object_type: "Operation",
        });
    }

    fn produce(self) -> FintrackResult<String> {
        let document = ExportDocument {
            accounts: self.accounts,
            categories: self.categories,
            operations: self.operations,
            export_date: Utc::now(),
        };

        serde_json::to_string_pretty(&document).map_err(|e| FintrackError::Export(e.to_string()))
    }
}
