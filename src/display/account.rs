//! Account display formatting
//!
//! Formats accounts for terminal output as a table with a total row.

use rust_decimal::Decimal;

use crate::models::Account;

/// Format a list of accounts with balances as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>12}\n",
        "ID",
        "Name",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>12}\n",
            account.id.short(),
            account.name,
            account.balance.to_string(),
            name_width = name_width,
        ));
    }

    let total: Decimal = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>12}\n",
        "",
        "TOTAL",
        total.to_string(),
        name_width = name_width,
    ));

    output
}
