//! Data transfer facade
//!
//! Single entry point for moving a dataset in and out of files. The format is
//! chosen from the file extension; exports go through the export visitors and
//! imports through the decode, validate, materialize pipeline.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::export::{self, CsvExportVisitor, JsonExportVisitor};
use crate::import::{self, IdentityPolicy};
use crate::models::{Account, Category, Operation, Snapshot};
use crate::storage::{read_text, write_text_atomic};

/// Supported transfer formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferFormat {
    #[default]
    Json,
    Csv,
}

impl TransferFormat {
    /// Select a format from a file extension, ignoring case
    pub fn from_path(path: &Path) -> FintrackResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            Some(other) => Err(FintrackError::UnsupportedFormat(format!(".{}", other))),
            None => Err(FintrackError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a format name such as `json` or `csv`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for TransferFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Csv => write!(f, "CSV"),
        }
    }
}

/// Outcome of a successful import
#[derive(Debug, Clone)]
pub struct TransferResult {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub operations: Vec<Operation>,
    pub success: bool,
    pub message: String,
}

impl TransferResult {
    fn imported(snapshot: Snapshot) -> Self {
        let message = format!(
            "Imported {} accounts, {} categories, {} operations",
            snapshot.accounts.len(),
            snapshot.categories.len(),
            snapshot.operations.len()
        );

        Self {
            accounts: snapshot.accounts,
            categories: snapshot.categories,
            operations: snapshot.operations,
            success: true,
            message,
        }
    }

    /// Repackage the imported entities as a snapshot
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::new(self.accounts, self.categories, self.operations)
    }
}

/// Facade over the exporters and importers
#[derive(Debug, Clone, Copy, Default)]
pub struct DataTransfer {
    policy: IdentityPolicy,
}

impl DataTransfer {
    /// Create a facade that imports under the given identity policy
    pub fn new(policy: IdentityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IdentityPolicy {
        self.policy
    }

    /// Render a dataset as a JSON document
    pub fn export_to_json(
        &self,
        accounts: &[Account],
        categories: &[Category],
        operations: &[Operation],
    ) -> FintrackResult<String> {
        export::drive(JsonExportVisitor::new(), accounts, categories, operations)
    }

    /// Render a dataset as a sectioned CSV document
    pub fn export_to_csv(
        &self,
        accounts: &[Account],
        categories: &[Category],
        operations: &[Operation],
    ) -> FintrackResult<String> {
        export::drive(CsvExportVisitor::new(), accounts, categories, operations)
    }

    /// Render a dataset in the given format
    pub fn export(
        &self,
        format: TransferFormat,
        accounts: &[Account],
        categories: &[Category],
        operations: &[Operation],
    ) -> FintrackResult<String> {
        match format {
            TransferFormat::Json => self.export_to_json(accounts, categories, operations),
            TransferFormat::Csv => self.export_to_csv(accounts, categories, operations),
        }
    }

    /// Export to a file, choosing the format from its extension
    ///
    /// The extension is checked before anything is written.
    pub fn export_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        accounts: &[Account],
        categories: &[Category],
        operations: &[Operation],
    ) -> FintrackResult<()> {
        let path = path.as_ref();
        let format = TransferFormat::from_path(path)?;

        let contents = self.export(format, accounts, categories, operations)?;
        write_text_atomic(path, &contents)?;

        tracing::info!(
            path = %path.display(),
            %format,
            accounts = accounts.len(),
            categories = categories.len(),
            operations = operations.len(),
            "Export written"
        );
        Ok(())
    }

    /// Import a JSON payload held in memory
    pub fn parse_json(&self, text: &str) -> FintrackResult<TransferResult> {
        self.finish(import::import_json(text, self.policy), TransferFormat::Json)
    }

    /// Import a CSV payload held in memory
    pub fn parse_csv(&self, text: &str) -> FintrackResult<TransferResult> {
        self.finish(import::import_csv(text, self.policy), TransferFormat::Csv)
    }

    /// Import a JSON file
    pub fn import_from_json<P: AsRef<Path>>(&self, path: P) -> FintrackResult<TransferResult> {
        let text = read_text(path)?;
        self.parse_json(&text)
    }

    /// Import a CSV file
    pub fn import_from_csv<P: AsRef<Path>>(&self, path: P) -> FintrackResult<TransferResult> {
        let text = read_text(path)?;
        self.parse_csv(&text)
    }

    /// Import a file, choosing the format from its extension
    pub fn import_from_file<P: AsRef<Path>>(&self, path: P) -> FintrackResult<TransferResult> {
        let path = path.as_ref();
        let format = TransferFormat::from_path(path)?;
        let text = read_text(path)?;

        tracing::debug!(path = %path.display(), %format, "Importing file");
        match format {
            TransferFormat::Json => self.parse_json(&text),
            TransferFormat::Csv => self.parse_csv(&text),
        }
    }

    fn finish(
        &self,
        result: FintrackResult<Snapshot>,
        format: TransferFormat,
    ) -> FintrackResult<TransferResult> {
        match result {
            Ok(snapshot) => {
                let result = TransferResult::imported(snapshot);
                tracing::info!(%format, policy = %self.policy, "{}", result.message);
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(%format, error = %e, "Import rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{create_account, create_category, create_operation, Decimal, OperationKind};
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample() -> (Vec<Account>, Vec<Category>, Vec<Operation>) {
        let account = create_account("Checking", Decimal::from(1000)).unwrap();
        let category = create_category("Food", OperationKind::Expense).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let operation = create_operation(
            OperationKind::Expense,
            account.id,
            Decimal::from(25),
            category.id,
            date,
            Some("Lunch".into()),
        )
        .unwrap();
        (vec![account], vec![category], vec![operation])
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            TransferFormat::from_path(&PathBuf::from("a.json")).unwrap(),
            TransferFormat::Json
        );
        assert_eq!(
            TransferFormat::from_path(&PathBuf::from("A.CSV")).unwrap(),
            TransferFormat::Csv
        );
        assert!(matches!(
            TransferFormat::from_path(&PathBuf::from("data.xyz")),
            Err(FintrackError::UnsupportedFormat(ext)) if ext == ".xyz"
        ));
        assert!(matches!(
            TransferFormat::from_path(&PathBuf::from("noext")),
            Err(FintrackError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_in_memory() {
        let (accounts, categories, operations) = sample();
        let transfer = DataTransfer::default();

        let text = transfer
            .export_to_json(&accounts, &categories, &operations)
            .unwrap();
        let result = transfer.parse_json(&text).unwrap();

        assert!(result.success);
        assert_eq!(result.message, "Imported 1 accounts, 1 categories, 1 operations");
        assert_eq!(result.operations[0].account_id, result.accounts[0].id);
        assert_ne!(result.accounts[0].id, accounts[0].id);
    }

    #[test]
    fn test_csv_roundtrip_preserving_ids() {
        let (accounts, categories, operations) = sample();
        let transfer = DataTransfer::new(IdentityPolicy::Preserve);

        let text = transfer
            .export_to_csv(&accounts, &categories, &operations)
            .unwrap();
        let snapshot = transfer.parse_csv(&text).unwrap().into_snapshot();

        assert_eq!(snapshot.accounts, accounts);
        assert_eq!(snapshot.categories, categories);
        assert_eq!(snapshot.operations, operations);
    }

    #[test]
    fn test_export_unsupported_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.xyz");
        let (accounts, categories, operations) = sample();

        let err = DataTransfer::default()
            .export_to_file(&path, &accounts, &categories, &operations)
            .unwrap_err();
        assert!(matches!(err, FintrackError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_import_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = DataTransfer::default().import_from_file(&path).unwrap_err();
        assert!(matches!(err, FintrackError::FileNotFound(_)));
    }

    #[test]
    fn test_file_roundtrip_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let (accounts, categories, operations) = sample();
        let transfer = DataTransfer::default();

        for name in ["out.json", "out.CSV"] {
            let path = temp_dir.path().join(name);
            transfer
                .export_to_file(&path, &accounts, &categories, &operations)
                .unwrap();

            let result = transfer.import_from_file(&path).unwrap();
            assert_eq!(result.accounts.len(), 1);
            assert_eq!(result.operations[0].amount, Decimal::from(25));
            assert_eq!(result.operations[0].description.as_deref(), Some("Lunch"));
        }
    }
}
