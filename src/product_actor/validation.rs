//! Field rules for [`Product`].
//!
//! Rules are pure functions. [`validate_product`] runs all of them and aggregates every
//! violation, name before quantity, into one [`ValidationError`]. The "product must be
//! present" check happens earlier, in [`EntityService`](crate::framework::EntityService).

use crate::framework::{FieldViolation, ValidationError};
use crate::model::Product;

pub const NAME_REQUIRED: &str = "Product name must not be empty";
pub const QUANTITY_NON_NEGATIVE: &str = "Product quantity must not be negative";

/// `name` must contain at least one non-whitespace character.
pub fn check_name(name: &str) -> Option<FieldViolation> {
    name.trim()
        .is_empty()
        .then(|| FieldViolation::new("name", NAME_REQUIRED))
}

/// `quantity` must be zero or more.
pub fn check_quantity(quantity: i32) -> Option<FieldViolation> {
    (quantity < 0).then(|| FieldViolation::new("quantity", QUANTITY_NON_NEGATIVE))
}

pub fn validate_product(product: &Product) -> Result<(), ValidationError> {
    let violations = [check_name(&product.name), check_quantity(product.quantity)]
        .into_iter()
        .flatten()
        .collect();
    ValidationError::check(violations)
}
