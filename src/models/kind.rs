//! Income/expense classification shared by categories and operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a money movement
///
/// Serialized by symbolic name (`"income"`, `"expense"`). The integer forms
/// accepted by [`OperationKind::from_index`] exist only for reading payloads
/// written by older exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Income,
    Expense,
}

impl OperationKind {
    /// Parse a kind from its name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Legacy integer encoding: 0 is income, 1 is expense
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Income),
            1 => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(OperationKind::parse("income"), Some(OperationKind::Income));
        assert_eq!(OperationKind::parse("EXPENSE"), Some(OperationKind::Expense));
        assert_eq!(OperationKind::parse(" Expense "), Some(OperationKind::Expense));
        assert_eq!(OperationKind::parse("transfer"), None);
    }

    #[test]
    fn test_legacy_index() {
        assert_eq!(OperationKind::from_index(0), Some(OperationKind::Income));
        assert_eq!(OperationKind::from_index(1), Some(OperationKind::Expense));
        assert_eq!(OperationKind::from_index(2), None);
    }

    #[test]
    fn test_serde_uses_symbolic_names() {
        let json = serde_json::to_string(&OperationKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }
}
