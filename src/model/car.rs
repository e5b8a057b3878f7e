use serde::{Deserialize, Serialize};

/// Represents a car listing.
///
/// Only `id` has meaning to the framework; `name`, `color` and `quantity` are carried
/// through untouched and have no validation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub id: Option<String>,
    pub name: String,
    pub color: String,
    pub quantity: i32,
}

impl Car {
    /// Creates a new Car without an identifier.
    pub fn new(name: impl Into<String>, color: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
            quantity,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
