//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`Entity`] trait implementation that enables [`Product`]
//! to be managed by the generic [`crate::framework::ResourceActor`].

use super::validation::validate_product;
use crate::framework::{Entity, ValidationError};
use crate::model::Product;

impl Entity for Product {
    const KIND: &'static str = "Product";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    /// Runs every rule in [`validation`](super::validation).
    fn validate(&self) -> Result<(), ValidationError> {
        validate_product(self)
    }
}
