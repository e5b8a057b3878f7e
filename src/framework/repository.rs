//! # Repository
//!
//! Identity-keyed CRUD over an ordered, in-memory collection.
//!
//! The repository is the only component that mutates its store. It performs no validation
//! and no identifier assignment; that policy lives in [`EntityService`](super::EntityService).
//! Absence is a first-class return value (`None`), never an error.

use super::entity::Entity;

/// Storage contract for one entity type.
pub trait Repository<T: Entity>: Send + 'static {
    /// Appends `entity` and returns it unchanged. Duplicate ids are not detected.
    fn create(&mut self, entity: T) -> T;

    /// Snapshot of every stored entity, in insertion order.
    fn find_all(&self) -> Vec<T>;

    /// First entity whose id equals `id`.
    fn find_by_id(&self, id: &str) -> Option<T>;

    /// Replaces the stored entity with the same id, keeping its position.
    ///
    /// Returns `None` and leaves the store untouched when no entity matches.
    fn update(&mut self, entity: T) -> Option<T>;

    /// Removes every entity whose id equals `id`. Missing ids are a no-op.
    fn delete_by_id(&mut self, id: &str);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Vec`-backed repository with linear-scan lookups.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn create(&mut self, entity: T) -> T {
        self.items.push(entity.clone());
        entity
    }

    fn find_all(&self) -> Vec<T> {
        self.items.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<T> {
        self.items.iter().find(|item| item.has_id(id)).cloned()
    }

    fn update(&mut self, entity: T) -> Option<T> {
        let id = entity.id()?;
        let slot = self.items.iter_mut().find(|item| item.has_id(id))?;
        *slot = entity.clone();
        Some(entity)
    }

    fn delete_by_id(&mut self, id: &str) {
        self.items.retain(|item| !item.has_id(id));
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
