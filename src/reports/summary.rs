//! Summary and per-category reports
//!
//! Terminal renderings of the analytics for a date range.

use rust_decimal::Decimal;

use super::analytics::{Analytics, CategoryTotal, DateRange};
use crate::error::FintrackResult;
use crate::storage::Storage;

fn range_label(range: &DateRange, date_format: &str) -> String {
    let start = range
        .start
        .map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| "beginning".to_string());
    let end = range
        .end
        .map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| "now".to_string());
    format!("{} to {}", start, end)
}

/// Income, expenses and their difference over a range
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub range: DateRange,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub difference: Decimal,
}

impl SummaryReport {
    pub fn generate(storage: &Storage, range: DateRange) -> FintrackResult<Self> {
        let analytics = Analytics::new(storage);
        Ok(Self {
            range,
            total_income: analytics.total_income(range)?,
            total_expenses: analytics.total_expenses(range)?,
            difference: analytics.balance_difference(range)?,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Summary: {}\n",
            range_label(&self.range, date_format)
        ));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Total Income:", self.total_income));
        output.push_str(&format!("{:<20} {:>19}\n", "Total Expenses:", self.total_expenses));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Difference:", self.difference));

        output
    }
}

/// Net amount per category over a range
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub range: DateRange,
    pub rows: Vec<CategoryTotal>,
}

impl CategoryReport {
    pub fn generate(storage: &Storage, range: DateRange) -> FintrackResult<Self> {
        Ok(Self {
            range,
            rows: Analytics::new(storage).group_by_category(range)?,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "By category: {}\n",
            range_label(&self.range, date_format)
        ));

        if self.rows.is_empty() {
            output.push_str("No operations in range.\n");
            return output;
        }

        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>5}\n",
            "Category",
            "Net",
            "Count",
            width = name_width
        ));
        output.push_str(&"-".repeat(name_width + 21));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<width$}  {:>12}  {:>5}\n",
                row.name,
                row.net.to_string(),
                row.count,
                width = name_width
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OperationKind;
    use crate::services::{AccountService, CategoryService, OperationService};

    fn setup() -> Storage {
        let storage = Storage::new();
        AccountService::new(&storage)
            .create("Checking", Decimal::from(100))
            .unwrap();
        CategoryService::new(&storage)
            .create("Food", OperationKind::Expense)
            .unwrap();
        CategoryService::new(&storage)
            .create("Salary", OperationKind::Income)
            .unwrap();
        let ops = OperationService::new(&storage);
        ops.add("Checking", "Salary", Decimal::from(200), None, None, None)
            .unwrap();
        ops.add("Checking", "Food", Decimal::new(2550, 2), None, None, None)
            .unwrap();
        storage
    }

    #[test]
    fn test_summary_report() {
        let storage = setup();
        let report = SummaryReport::generate(&storage, DateRange::all()).unwrap();

        assert_eq!(report.total_income, Decimal::from(200));
        assert_eq!(report.total_expenses, Decimal::new(2550, 2));
        assert_eq!(report.difference, Decimal::new(17450, 2));

        let text = report.format_terminal("%Y-%m-%d");
        assert!(text.contains("beginning to now"));
        assert!(text.contains("174.50"));
    }

    #[test]
    fn test_category_report() {
        let storage = setup();
        let report = CategoryReport::generate(&storage, DateRange::all()).unwrap();

        assert_eq!(report.rows.len(), 2);
        let text = report.format_terminal("%Y-%m-%d");
        assert!(text.contains("Food"));
        assert!(text.contains("-25.50"));
        assert!(text.contains("Salary"));
    }

    #[test]
    fn test_empty_category_report() {
        let storage = Storage::new();
        let report = CategoryReport::generate(&storage, DateRange::all()).unwrap();
        assert!(report.format_terminal("%Y-%m-%d").contains("No operations"));
    }
}
