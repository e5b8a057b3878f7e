//! # Entity Trait
//!
//! The `Entity` trait is the contract every stored record (Product, Car, ...) implements
//! so that the generic [`Repository`](super::Repository), [`EntityService`](super::EntityService)
//! and [`ResourceActor`](super::ResourceActor) can manage it.
//!
//! # Identity
//! Identifiers are opaque strings. A record may arrive without one (`None` or empty);
//! the service assigns it before the record reaches storage.
//!
//! # Provided Methods (Hooks)
//! [`Entity::validate`] has a default implementation that accepts everything.
//! Override it to reject structurally invalid records before they are stored.

use std::fmt::Debug;

use super::error::ValidationError;

/// Trait that any record must implement to be managed by the framework.
pub trait Entity: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Human-readable kind, used in log fields and validation messages (e.g. `"Product"`).
    const KIND: &'static str;

    /// The identifier, if one has been assigned.
    fn id(&self) -> Option<&str>;

    /// Overwrites the identifier.
    fn assign_id(&mut self, id: String);

    /// Checks field constraints.
    ///
    /// Implementations collect every violated rule into a single [`ValidationError`]
    /// rather than stopping at the first one.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// True when the record has no usable identifier yet.
    fn needs_id(&self) -> bool {
        self.id().map_or(true, str::is_empty)
    }

    /// True when the record's identifier equals `id`.
    fn has_id(&self, id: &str) -> bool {
        self.id() == Some(id)
    }
}
