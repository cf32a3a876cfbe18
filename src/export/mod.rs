//! Export module for fintrack
//!
//! Exporters are visitors: each one is offered every account, then every
//! category, then every operation, and finally produces one document.
//! - JSON: machine-readable document with typed records
//! - CSV: three sectioned tables, spreadsheet-compatible

pub mod csv;
pub mod json;

pub use csv::CsvExportVisitor;
pub use json::JsonExportVisitor;

use crate::error::FintrackResult;
use crate::models::{Account, Category, Operation};

/// Serializer that accumulates entities and emits one document
///
/// `produce` consumes the visitor, so a visitor serves exactly one export.
pub trait ExportVisitor {
    fn visit_account(&mut self, account: &Account);

    fn visit_category(&mut self, category: &Category);

    fn visit_operation(&mut self, operation: &Operation);

    /// Finish the export and return the document text
    fn produce(self) -> FintrackResult<String>;
}

/// Offer every entity to a visitor once, accounts first, then produce
pub fn drive<V: ExportVisitor>(
    mut visitor: V,
    accounts: &[Account],
    categories: &[Category],
    operations: &[Operation],
) -> FintrackResult<String> {
    for account in accounts {
        visitor.visit_account(account);
    }
    for category in categories {
        visitor.visit_category(category);
    }
    for operation in operations {
        visitor.visit_operation(operation);
    }
    visitor.produce()
}
