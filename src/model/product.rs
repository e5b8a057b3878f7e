use serde::{Deserialize, Serialize};

/// Represents a product in the inventory.
///
/// # Entity
/// This struct implements the [`Entity`](crate::framework::Entity) trait; see
/// [`product_actor::entity`](crate::product_actor::entity) for the implementation and
/// [`product_actor::validation`](crate::product_actor::validation) for the rules checked
/// before every create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// `None` (or empty) until the service assigns one.
    pub id: Option<String>,
    pub name: String,
    /// Signed so that a negative submission can be represented and rejected.
    pub quantity: i32,
}

impl Product {
    /// Creates a new Product without an identifier.
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
