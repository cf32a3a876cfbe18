//! CSV Export functionality
//!
//! Writes accounts, categories and operations as three sections. Each section
//! starts with a `=== Name ===` marker line followed by its header row, and
//! sections are separated by a blank line.

use super::ExportVisitor;
use crate::error::FintrackResult;
use crate::models::{Account, Category, Operation};

pub const ACCOUNTS_MARKER: &str = "=== Accounts ===";
pub const CATEGORIES_MARKER: &str = "=== Categories ===";
pub const OPERATIONS_MARKER: &str = "=== Operations ===";

pub const ACCOUNTS_HEADER: &str = "Id,Name,Balance";
pub const CATEGORIES_HEADER: &str = "Id,Name,Type";
pub const OPERATIONS_HEADER: &str = "Id,Type,BankAccountId,Amount,Date,Description,CategoryId";

/// Date layout used in the Operations section
///
/// Whole seconds only; any sub-second part of an operation date is dropped.
pub const CSV_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Visitor producing the sectioned CSV document
#[derive(Debug, Default)]
pub struct CsvExportVisitor {
    accounts: Vec<String>,
    categories: Vec<String>,
    operations: Vec<String>,
}

impl CsvExportVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportVisitor for CsvExportVisitor {
    fn visit_account(&mut self, account: &Account) {
        self.accounts.push(format!(
            "{},{},{}",
            account.id,
            escape_csv(&account.name),
            account.balance
        ));
    }

    fn visit_category(&mut self, category: &Category) {
        self.categories.push(format!(
            "{},{},{}",
            category.id,
            escape_csv(&category.name),
            category.kind
        ));
    }

    fn visit_operation(&mut self, operation: &Operation) {
        self.operations.push(format!(
            "{},{},{},{},{},{},{}",
            operation.id,
            operation.kind,
            operation.account_id,
            operation.amount,
            operation.date.format(CSV_DATE_FORMAT),
            escape_csv(operation.description.as_deref().unwrap_or("")),
            operation.category_id
        ));
    }

    fn produce(self) -> FintrackResult<String> {
        let mut out = String::new();

        write_section(&mut out, ACCOUNTS_MARKER, ACCOUNTS_HEADER, &self.accounts);
        out.push('\n');
        write_section(&mut out, CATEGORIES_MARKER, CATEGORIES_HEADER, &self.categories);
        out.push('\n');
        write_section(&mut out, OPERATIONS_MARKER, OPERATIONS_HEADER, &self.operations);

        Ok(out)
    }
}

fn write_section(out: &mut String, marker: &str, header: &str, rows: &[String]) {
    out.push_str(marker);
    out.push('\n');
    out.push_str(header);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
}

/// Escape a string for CSV format
pub fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
