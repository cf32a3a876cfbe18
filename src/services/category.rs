//! Category service
//!
//! Provides business logic for income and expense categories.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{create_category, Category, CategoryId, OperationKind};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, name: &str, kind: OperationKind) -> FintrackResult<Category> {
        let name = name.trim();

        if self.get_by_name(name)?.is_some() {
            return Err(FintrackError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = create_category(name, kind)?;
        self.storage.categories.add(category.clone())?;

        tracing::info!(id = %category.id, name = %category.name, kind = %category.kind, "Category created");
        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> FintrackResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> FintrackResult<Option<Category>> {
        let name = name.trim().to_lowercase();
        self.storage
            .categories
            .find(|c| c.name.to_lowercase() == name)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Category>> {
        if let Some(category) = self.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(None)
    }

    /// Find a category or fail with a not-found error
    pub fn require(&self, identifier: &str) -> FintrackResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| FintrackError::category_not_found(identifier))
    }

    /// Get all categories, sorted by name
    pub fn list(&self) -> FintrackResult<Vec<Category>> {
        Ok(self.storage.snapshot()?.categories)
    }

    /// Get categories of one kind
    pub fn list_by_kind(&self, kind: OperationKind) -> FintrackResult<Vec<Category>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|c| c.kind == kind)
            .collect())
    }

    /// Delete a category that no operation refers to
    pub fn delete(&self, identifier: &str) -> FintrackResult<Category> {
        let category = self.require(identifier)?;

        let referenced = self
            .storage
            .operations
            .get_all()?
            .iter()
            .filter(|o| o.category_id == category.id)
            .count();
        if referenced > 0 {
            return Err(FintrackError::InvalidArgument(format!(
                "Category '{}' still has {} operations",
                category.name, referenced
            )));
        }

        self.storage.categories.delete(category.id)?;
        tracing::info!(id = %category.id, name = %category.name, "Category deleted");
        Ok(category)
    }
}
