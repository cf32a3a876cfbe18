//! Analytics over recorded operations
//!
//! Totals and per-category grouping within an inclusive date range.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::FintrackResult;
use crate::models::{CategoryId, Operation, OperationKind};
use crate::storage::Storage;

/// Name used for operations whose category no longer exists
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Inclusive date range; an open end is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Range covering every date
    pub fn all() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

/// Net amount and count for one category name
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    /// Income minus expenses
    pub net: Decimal,
    pub count: usize,
}

/// Aggregations over the operations in storage
pub struct Analytics<'a> {
    storage: &'a Storage,
}

impl<'a> Analytics<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn operations_in(&self, range: DateRange) -> FintrackResult<Vec<Operation>> {
        Ok(self
            .storage
            .operations
            .get_all()?
            .into_iter()
            .filter(|o| range.contains(o.date))
            .collect())
    }

    fn total_of(&self, kind: OperationKind, range: DateRange) -> FintrackResult<Decimal> {
        Ok(self
            .operations_in(range)?
            .iter()
            .filter(|o| o.kind == kind)
            .map(|o| o.amount)
            .sum())
    }

    /// Sum of income amounts in the range
    pub fn total_income(&self, range: DateRange) -> FintrackResult<Decimal> {
        self.total_of(OperationKind::Income, range)
    }

    /// Sum of expense amounts in the range
    pub fn total_expenses(&self, range: DateRange) -> FintrackResult<Decimal> {
        self.total_of(OperationKind::Expense, range)
    }

    /// Income minus expenses in the range
    pub fn balance_difference(&self, range: DateRange) -> FintrackResult<Decimal> {
        Ok(self
            .operations_in(range)?
            .iter()
            .map(|o| o.balance_delta())
            .sum())
    }

    /// Net amount per category name, sorted by name
    ///
    /// Operations whose category is missing are grouped under `Unknown`.
    pub fn group_by_category(&self, range: DateRange) -> FintrackResult<Vec<CategoryTotal>> {
        let names: BTreeMap<CategoryId, String> = self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let mut totals: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
        for operation in self.operations_in(range)? {
            let name = names
                .get(&operation.category_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
            let entry = totals.entry(name).or_insert((Decimal::ZERO, 0));
            entry.0 += operation.balance_delta();
            entry.1 += 1;
        }

        Ok(totals
            .into_iter()
            .map(|(name, (net, count))| CategoryTotal { name, net, count })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{create_account, create_category, create_operation};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn setup() -> Storage {
        let storage = Storage::new();
        let account = create_account("Checking", Decimal::from(1000)).unwrap();
        let food = create_category("Food", OperationKind::Expense).unwrap();
        let salary = create_category("Salary", OperationKind::Income).unwrap();

        let ops = [
            (OperationKind::Income, salary.id, 500, 1),
            (OperationKind::Expense, food.id, 30, 5),
            (OperationKind::Expense, food.id, 20, 10),
            (OperationKind::Expense, crate::models::CategoryId::new(), 7, 12),
        ];
        for (kind, category_id, amount, d) in ops {
            let op = create_operation(kind, account.id, Decimal::from(amount), category_id, day(d), None)
                .unwrap();
            storage.operations.add(op).unwrap();
        }

        storage.accounts.add(account).unwrap();
        storage.categories.add(food).unwrap();
        storage.categories.add(salary).unwrap();
        storage
    }

    #[test]
    fn test_totals() {
        let storage = setup();
        let analytics = Analytics::new(&storage);

        assert_eq!(analytics.total_income(DateRange::all()).unwrap(), Decimal::from(500));
        assert_eq!(analytics.total_expenses(DateRange::all()).unwrap(), Decimal::from(57));
        assert_eq!(
            analytics.balance_difference(DateRange::all()).unwrap(),
            Decimal::from(443)
        );
    }

    #[test]
    fn test_range_is_inclusive() {
        let storage = setup();
        let analytics = Analytics::new(&storage);

        let range = DateRange::new(Some(day(5)), Some(day(10)));
        assert_eq!(analytics.total_expenses(range).unwrap(), Decimal::from(50));
        assert_eq!(analytics.total_income(range).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_group_by_category() {
        let storage = setup();
        let analytics = Analytics::new(&storage);

        let groups = analytics.group_by_category(DateRange::all()).unwrap();
        assert_eq!(
            groups,
            vec![
                CategoryTotal {
                    name: "Food".into(),
                    net: Decimal::from(-50),
                    count: 2
                },
                CategoryTotal {
                    name: "Salary".into(),
                    net: Decimal::from(500),
                    count: 1
                },
                CategoryTotal {
                    name: UNKNOWN_CATEGORY.into(),
                    net: Decimal::from(-7),
                    count: 1
                },
            ]
        );
    }
}
