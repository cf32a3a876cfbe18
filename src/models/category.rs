//! Category model
//!
//! Categories classify operations as income or expense.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, Identifiable};
use super::kind::OperationKind;

/// An income or expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Whether operations in this category are income or expense
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Category {
    /// Replace the identity, keeping every other field
    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = id;
        self
    }
}

impl Identifiable for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
