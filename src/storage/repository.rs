//! Generic in-memory repository
//!
//! One repository type serves every entity kind; the key comes from the
//! entity's [`Identifiable`] implementation.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FintrackError;
use crate::models::Identifiable;

/// Keyed in-memory store for one entity kind
pub struct InMemoryRepository<T: Identifiable> {
    data: RwLock<HashMap<T::Id, T>>,
}

impl<T> InMemoryRepository<T>
where
    T: Identifiable + Clone,
{
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<T::Id, T>>, FintrackError> {
        self.data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<T::Id, T>>, FintrackError> {
        self.data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Insert an entity, replacing any entity with the same identity
    pub fn add(&self, entity: T) -> Result<(), FintrackError> {
        self.write()?.insert(entity.id(), entity);
        Ok(())
    }

    /// Replace an existing entity; returns false if it was not stored
    pub fn update(&self, entity: T) -> Result<bool, FintrackError> {
        let mut data = self.write()?;
        let id = entity.id();
        if !data.contains_key(&id) {
            return Ok(false);
        }
        data.insert(id, entity);
        Ok(true)
    }

    /// Get an entity by identity
    pub fn get(&self, id: T::Id) -> Result<Option<T>, FintrackError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Get all entities, in no particular order
    pub fn get_all(&self) -> Result<Vec<T>, FintrackError> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Find the first entity matching a predicate
    pub fn find<F>(&self, predicate: F) -> Result<Option<T>, FintrackError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.read()?.values().find(|e| predicate(e)).cloned())
    }

    /// Delete an entity; returns true if something was removed
    pub fn delete(&self, id: T::Id) -> Result<bool, FintrackError> {
        Ok(self.write()?.remove(&id).is_some())
    }

    /// Check if an entity exists
    pub fn exists(&self, id: T::Id) -> Result<bool, FintrackError> {
        Ok(self.read()?.contains_key(&id))
    }

    /// Count entities
    pub fn count(&self) -> Result<usize, FintrackError> {
        Ok(self.read()?.len())
    }

    /// Remove every entity
    pub fn clear(&self) -> Result<(), FintrackError> {
        self.write()?.clear();
        Ok(())
    }
}

impl<T> Default for InMemoryRepository<T>
where
    T: Identifiable + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
