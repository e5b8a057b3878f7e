//! # Entity Service
//!
//! Business policy around a [`Repository`]: validation before every mutation and
//! identifier assignment on create. The service never touches storage directly.

use std::marker::PhantomData;

use tracing::debug;
use uuid::Uuid;

use super::entity::Entity;
use super::error::ValidationError;
use super::repository::{InMemoryRepository, Repository};

/// Produces a fresh identifier for an entity that arrives without one.
pub type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// Random UUID v4, rendered in hyphenated form.
pub fn uuid_id() -> String {
    Uuid::new_v4().to_string()
}

/// Orchestrates validation and id assignment for one entity type.
pub struct EntityService<T: Entity, R: Repository<T> = InMemoryRepository<T>> {
    repository: R,
    next_id_fn: IdGenerator,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> EntityService<T> {
    /// Service over an empty in-memory repository with UUID identifiers.
    pub fn new() -> Self {
        Self::with_repository(InMemoryRepository::new())
    }
}

impl<T: Entity> Default for EntityService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity, R: Repository<T>> EntityService<T, R> {
    pub fn with_repository(repository: R) -> Self {
        Self {
            repository,
            next_id_fn: Box::new(uuid_id),
            _entity: PhantomData,
        }
    }

    /// Replaces the identifier generator.
    pub fn with_id_generator(
        mut self,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.next_id_fn = Box::new(next_id_fn);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validates and stores a new entity, generating its id when absent or empty.
    ///
    /// Nothing reaches the repository when validation fails.
    pub fn create(&mut self, entity: impl Into<Option<T>>) -> Result<T, ValidationError> {
        let mut entity = Self::validated(entity.into())?;
        if entity.needs_id() {
            entity.assign_id((self.next_id_fn)());
        }
        debug!(entity_type = T::KIND, id = entity.id(), "Storing new entity");
        Ok(self.repository.create(entity))
    }

    pub fn find_all(&self) -> Vec<T> {
        self.repository.find_all()
    }

    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.repository.find_by_id(id)
    }

    /// Validates and replaces the stored entity with the same id.
    ///
    /// `Ok(None)` means the entity was valid but no stored entity had its id.
    pub fn update(&mut self, entity: impl Into<Option<T>>) -> Result<Option<T>, ValidationError> {
        let entity = Self::validated(entity.into())?;
        Ok(self.repository.update(entity))
    }

    pub fn delete_by_id(&mut self, id: &str) {
        self.repository.delete_by_id(id);
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    // Presence is checked alone; field rules only run on a present entity.
    fn validated(entity: Option<T>) -> Result<T, ValidationError> {
        let entity = entity.ok_or_else(|| ValidationError::missing(T::KIND))?;
        entity.validate()?;
        Ok(entity)
    }
}
