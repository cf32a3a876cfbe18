//! Operation display formatting
//!
//! Register view of operations with account and category names resolved.

use std::collections::HashMap;

use crate::models::{AccountId, CategoryId, Operation, OperationKind};

/// Name lookups used when rendering operations
#[derive(Debug, Default)]
pub struct NameLookup {
    pub accounts: HashMap<AccountId, String>,
    pub categories: HashMap<CategoryId, String>,
}

impl NameLookup {
    fn account(&self, id: AccountId) -> &str {
        self.accounts.get(&id).map(String::as_str).unwrap_or("Unknown")
    }

    fn category(&self, id: CategoryId) -> &str {
        self.categories.get(&id).map(String::as_str).unwrap_or("Unknown")
    }
}

/// Format a single operation as a register row
pub fn format_operation_row(operation: &Operation, names: &NameLookup, date_format: &str) -> String {
    let sign = match operation.kind {
        OperationKind::Income => "+",
        OperationKind::Expense => "-",
    };

    format!(
        "{:<12} {:<16} {:<16} {:>12}  {}",
        operation.date.format(date_format).to_string(),
        truncate(names.account(operation.account_id), 16),
        truncate(names.category(operation.category_id), 16),
        format!("{}{}", sign, operation.amount),
        operation.description.as_deref().unwrap_or("")
    )
}

/// Format a list of operations as a register
pub fn format_operation_register(
    operations: &[Operation],
    names: &NameLookup,
    date_format: &str,
) -> String {
    if operations.is_empty() {
        return "No operations found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<16} {:<16} {:>12}  {}\n",
        "Date", "Account", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for operation in operations {
        output.push_str(&format_operation_row(operation, names, date_format));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
