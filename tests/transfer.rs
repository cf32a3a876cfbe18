//! Export/import behavior through the public transfer facade

use chrono::{NaiveDate, NaiveDateTime};
use fintrack::import::IdentityPolicy;
use fintrack::models::{
    create_account, create_category, create_operation, Account, Category, Decimal, Operation,
    OperationKind,
};
use fintrack::{DataTransfer, FintrackError};
use tempfile::TempDir;

fn noon(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn lunch_dataset(description: &str) -> (Vec<Account>, Vec<Category>, Vec<Operation>) {
    let account = create_account("Checking", Decimal::from(1000)).unwrap();
    let category = create_category("Food", OperationKind::Expense).unwrap();
    let operation = create_operation(
        OperationKind::Expense,
        account.id,
        Decimal::from(25),
        category.id,
        noon(15),
        Some(description.to_string()),
    )
    .unwrap();
    (vec![account], vec![category], vec![operation])
}

#[test]
fn csv_export_then_import_yields_lunch() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.csv");
    let (accounts, categories, operations) = lunch_dataset("Lunch");
    let transfer = DataTransfer::default();

    transfer
        .export_to_file(&path, &accounts, &categories, &operations)
        .unwrap();
    let result = transfer.import_from_csv(&path).unwrap();

    assert!(result.success);
    assert_eq!(result.accounts.len(), 1);
    assert_eq!(result.categories.len(), 1);
    assert_eq!(result.operations.len(), 1);
    assert_eq!(result.operations[0].amount, Decimal::from(25));
    assert_eq!(result.operations[0].description.as_deref(), Some("Lunch"));
    assert_eq!(
        result.message,
        "Imported 1 accounts, 1 categories, 1 operations"
    );
}

#[test]
fn json_roundtrip_remaps_references() {
    let (accounts, categories, operations) = lunch_dataset("Lunch");
    let transfer = DataTransfer::new(IdentityPolicy::Remap);

    let text = transfer
        .export_to_json(&accounts, &categories, &operations)
        .unwrap();
    let result = transfer.parse_json(&text).unwrap();

    let imported = &result.operations[0];
    assert_eq!(imported.account_id, result.accounts[0].id);
    assert_eq!(imported.category_id, result.categories[0].id);
    assert_eq!(imported.kind, OperationKind::Expense);
    assert_eq!(imported.date, operations[0].date);
    assert_eq!(result.categories[0].name, "Food");
}

#[test]
fn json_roundtrip_preserves_ids() {
    let (accounts, categories, operations) = lunch_dataset("Lunch");
    let transfer = DataTransfer::new(IdentityPolicy::Preserve);

    let text = transfer
        .export_to_json(&accounts, &categories, &operations)
        .unwrap();
    let snapshot = transfer.parse_json(&text).unwrap().into_snapshot();

    assert_eq!(snapshot.accounts, accounts);
    assert_eq!(snapshot.categories, categories);
    assert_eq!(snapshot.operations, operations);
}

#[test]
fn csv_escaping_survives_roundtrip() {
    let tricky = "Dinner, \"fancy\"\nwith friends";
    let (accounts, categories, operations) = lunch_dataset(tricky);
    let transfer = DataTransfer::default();

    let text = transfer
        .export_to_csv(&accounts, &categories, &operations)
        .unwrap();
    let result = transfer.parse_csv(&text).unwrap();

    assert_eq!(result.operations[0].description.as_deref(), Some(tricky));
}

#[test]
fn dangling_account_reference_is_rejected() {
    let text = r#"{
        "accounts": [
            {"id": "11111111-1111-1111-1111-111111111111", "name": "Checking", "balance": "10"}
        ],
        "categories": [
            {"id": "22222222-2222-2222-2222-222222222222", "name": "Food", "type": "expense"}
        ],
        "operations": [{
            "id": "33333333-3333-3333-3333-333333333333",
            "type": "expense",
            "bankAccountId": "99999999-9999-9999-9999-999999999999",
            "amount": "5",
            "date": "2025-01-01T00:00:00",
            "categoryId": "22222222-2222-2222-2222-222222222222"
        }]
    }"#;

    let err = DataTransfer::default().parse_json(text).unwrap_err();
    match err {
        FintrackError::Validation { entity, id, .. } => {
            assert_eq!(entity, "Operation");
            assert_eq!(id, "33333333-3333-3333-3333-333333333333");
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn negative_balance_is_rejected() {
    let text = "=== Accounts ===\nId,Name,Balance\na1,Checking,-5\n";
    let err = DataTransfer::default().parse_csv(text).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn legacy_integer_type_decodes_as_expense() {
    let text = r#"{
        "accounts": [{"id": "a", "name": "Cash", "balance": 50}],
        "categories": [{"id": "c", "name": "Food", "type": 1}],
        "operations": [{
            "id": "o", "type": 1, "bankAccountId": "a", "amount": 5,
            "date": "2025-01-02T10:00:00", "categoryId": "c"
        }]
    }"#;

    let result = DataTransfer::default().parse_json(text).unwrap();
    assert_eq!(result.categories[0].kind, OperationKind::Expense);
    assert_eq!(result.operations[0].kind, OperationKind::Expense);
}

#[test]
fn unsupported_extension_fails_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.xyz");
    let (accounts, categories, operations) = lunch_dataset("Lunch");

    let err = DataTransfer::default()
        .export_to_file(&path, &accounts, &categories, &operations)
        .unwrap_err();

    assert!(matches!(err, FintrackError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn missing_file_fails_before_parsing() {
    let temp_dir = TempDir::new().unwrap();

    for name in ["missing.json", "missing.csv"] {
        let path = temp_dir.path().join(name);
        let err = DataTransfer::default().import_from_file(&path).unwrap_err();
        assert!(matches!(err, FintrackError::FileNotFound(p) if p == path));
    }

    let err = DataTransfer::default()
        .import_from_csv(temp_dir.path().join("nope.csv"))
        .unwrap_err();
    assert!(matches!(err, FintrackError::FileNotFound(_)));
}

#[test]
fn malformed_csv_row_names_its_line() {
    let text = "=== Accounts ===\nId,Name,Balance\na1,Checking,10\na2,Savings\n";
    let err = DataTransfer::default().parse_csv(text).unwrap_err();

    assert!(matches!(err, FintrackError::Parse { line: Some(4), .. }));
    assert!(err.to_string().starts_with("Parse error at line 4"));
}

#[test]
fn empty_dataset_roundtrips() {
    let transfer = DataTransfer::default();

    let json = transfer.export_to_json(&[], &[], &[]).unwrap();
    let csv = transfer.export_to_csv(&[], &[], &[]).unwrap();

    assert_eq!(
        transfer.parse_json(&json).unwrap().into_snapshot().summary(),
        "0 accounts, 0 categories, 0 operations"
    );
    assert!(transfer.parse_csv(&csv).unwrap().into_snapshot().is_empty());
}

#[test]
fn preserve_rejects_one_id_spelled_twice() {
    let text = r#"{
        "accounts": [
            {"id": "550e8400-e29b-41d4-a716-446655440000", "name": "Checking", "balance": "10"},
            {"id": "550E8400-E29B-41D4-A716-446655440000", "name": "Savings", "balance": "20"}
        ]
    }"#;

    let err = DataTransfer::new(IdentityPolicy::Preserve)
        .parse_json(text)
        .unwrap_err();
    assert!(err.is_validation());

    let result = DataTransfer::new(IdentityPolicy::Remap).parse_json(text).unwrap();
    assert_eq!(result.accounts.len(), 2);
}
