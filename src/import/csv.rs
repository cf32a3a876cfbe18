//! CSV import
//!
//! Reads the sectioned layout written by the CSV exporter. Quoted fields may
//! contain commas, doubled quotes and line breaks.

use ::csv::{ReaderBuilder, StringRecord};

use super::staged::{StagedAccount, StagedCategory, StagedOperation, StagedSnapshot};
use super::tokens::{id_token, parse_datetime, parse_decimal, parse_kind};
use crate::error::{FintrackError, FintrackResult};
use crate::export::csv::{ACCOUNTS_HEADER, CATEGORIES_HEADER, OPERATIONS_HEADER};

/// Section the reader is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// No marker seen yet
    Start,
    Accounts,
    Categories,
    Operations,
    /// Marker with a name this reader does not know; rows are skipped
    Ignored,
}

impl Section {
    fn from_marker(marker: &str) -> Self {
        match marker.trim_matches('=').trim().to_lowercase().as_str() {
            "accounts" => Self::Accounts,
            "categories" => Self::Categories,
            "operations" => Self::Operations,
            _ => Self::Ignored,
        }
    }

    fn header(self) -> Option<&'static str> {
        match self {
            Self::Accounts => Some(ACCOUNTS_HEADER),
            Self::Categories => Some(CATEGORIES_HEADER),
            Self::Operations => Some(OPERATIONS_HEADER),
            Self::Start | Self::Ignored => None,
        }
    }

    fn columns(self) -> usize {
        self.header().map(|h| h.split(',').count()).unwrap_or(0)
    }
}

/// Decode a CSV payload into a staged snapshot
pub fn decode(text: &str) -> FintrackResult<StagedSnapshot> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut staged = StagedSnapshot::new();
    let mut section = Section::Start;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if is_blank(&record) {
            continue;
        }

        let first = record.get(0).unwrap_or("").trim();
        if record.len() == 1 && first.starts_with("===") {
            section = Section::from_marker(first);
            tracing::debug!(line, ?section, "CSV section");
            continue;
        }

        if is_header(&record, section) {
            continue;
        }

        match section {
            Section::Start => {
                return Err(FintrackError::parse_at(
                    line,
                    "data row before any section marker",
                ))
            }
            Section::Ignored => continue,
            _ => {}
        }

        let expected = section.columns();
        if record.len() != expected {
            return Err(FintrackError::parse_at(
                line,
                format!("expected {} columns, got {}", expected, record.len()),
            ));
        }

        let at = |message: String| FintrackError::parse_at(line, message);
        match section {
            Section::Accounts => staged.accounts.push(StagedAccount {
                id: id_token(&record[0]),
                name: record[1].to_string(),
                balance: parse_decimal(&record[2]).map_err(at)?,
            }),
            Section::Categories => staged.categories.push(StagedCategory {
                id: id_token(&record[0]),
                name: record[1].to_string(),
                kind: parse_kind(&record[2]).map_err(at)?,
            }),
            Section::Operations => staged.operations.push(StagedOperation {
                id: id_token(&record[0]),
                kind: parse_kind(&record[1]).map_err(at)?,
                account_ref: reference(&record[2], "account").map_err(at)?,
                amount: parse_decimal(&record[3]).map_err(at)?,
                date: parse_datetime(&record[4]).map_err(at)?,
                description: Some(record[5].to_string()).filter(|d| !d.is_empty()),
                category_ref: reference(&record[6], "category").map_err(at)?,
            }),
            Section::Start | Section::Ignored => {}
        }
    }

    Ok(staged)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn is_header(record: &StringRecord, section: Section) -> bool {
    match section.header() {
        Some(header) => {
            record.len() == section.columns()
                && record
                    .iter()
                    .zip(header.split(','))
                    .all(|(field, name)| field.trim().eq_ignore_ascii_case(name))
        }
        None => false,
    }
}

fn reference(token: &str, entity: &str) -> Result<String, String> {
    id_token(token).ok_or_else(|| format!("missing {} reference", entity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Decimal, OperationKind};

    const SAMPLE: &str = "=== Accounts ===\n\
        Id,Name,Balance\n\
        a1,Checking,100.50\n\
        \n\
        === Categories ===\n\
        Id,Name,Type\n\
        c1,Food,Expense\n\
        c2,Salary,income\n\
        \n\
        === Operations ===\n\
        Id,Type,BankAccountId,Amount,Date,Description,CategoryId\n\
        o1,Expense,a1,25.00,2025-01-15 12:00:00,Lunch,c1\n\
        o2,Income,a1,1000,2025-01-31,,c2\n";

    #[test]
    fn test_decode_sections() {
        let staged = decode(SAMPLE).unwrap();

        assert_eq!(staged.accounts.len(), 1);
        assert_eq!(staged.accounts[0].id.as_deref(), Some("a1"));
        assert_eq!(staged.accounts[0].balance, Decimal::new(10050, 2));

        assert_eq!(staged.categories.len(), 2);
        assert_eq!(staged.categories[1].kind, OperationKind::Income);

        assert_eq!(staged.operations.len(), 2);
        let lunch = &staged.operations[0];
        assert_eq!(lunch.account_ref, "a1");
        assert_eq!(lunch.category_ref, "c1");
        assert_eq!(lunch.amount, Decimal::from(25));
        assert_eq!(lunch.description.as_deref(), Some("Lunch"));
        assert_eq!(staged.operations[1].description, None);
    }

    #[test]
    fn test_quoted_fields() {
        let text = "=== Operations ===\n\
            Id,Type,BankAccountId,Amount,Date,Description,CategoryId\n\
            o1,Expense,a1,5,2025-01-01 00:00:00,\"Coffee, \"\"large\"\"\nwith cake\",c1\n";

        let staged = decode(text).unwrap();
        assert_eq!(
            staged.operations[0].description.as_deref(),
            Some("Coffee, \"large\"\nwith cake")
        );
    }

    #[test]
    fn test_wrong_column_count_names_line() {
        let text = "=== Accounts ===\nId,Name,Balance\na1,Checking\n";

        let err = decode(text).unwrap_err();
        assert!(matches!(err, FintrackError::Parse { line: Some(3), .. }));
        assert!(err.to_string().contains("expected 3 columns, got 2"));
    }

    #[test]
    fn test_bad_decimal_names_line() {
        let text = "=== Accounts ===\nId,Name,Balance\n\na1,Checking,lots\n";

        let err = decode(text).unwrap_err();
        assert!(matches!(err, FintrackError::Parse { line: Some(4), .. }));
        assert!(err.to_string().contains("'lots'"));
    }

    #[test]
    fn test_bad_kind_is_parse_error() {
        let text = "=== Categories ===\nId,Name,Type\nc1,Food,Transfer\n";
        let err = decode(text).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("'Transfer'"));
    }

    #[test]
    fn test_data_before_marker() {
        let err = decode("a1,Checking,10\n").unwrap_err();
        assert!(matches!(err, FintrackError::Parse { line: Some(1), .. }));
    }

    #[test]
    fn test_unknown_section_is_skipped() {
        let text = "=== Budgets ===\nwhatever,1,2,3\n\n=== Accounts ===\nId,Name,Balance\na1,Cash,0\n";
        let staged = decode(text).unwrap();
        assert_eq!(staged.accounts.len(), 1);
    }

    #[test]
    fn test_missing_reference() {
        let text = "=== Operations ===\n\
            Id,Type,BankAccountId,Amount,Date,Description,CategoryId\n\
            o1,Expense,,5,2025-01-01,,c1\n";
        let err = decode(text).unwrap_err();
        assert!(err.to_string().contains("missing account reference"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "=== Accounts ===\r\nId,Name,Balance\r\na1,Checking,10\r\n";
        let staged = decode(text).unwrap();
        assert_eq!(staged.accounts[0].name, "Checking");
        assert_eq!(staged.accounts[0].balance, Decimal::from(10));
    }
}
