//! Error types for the Product actor.

use thiserror::Error;

use crate::framework::{FrameworkError, ValidationError};

/// Errors that can occur during product operations.
///
/// A missing product is not an error; lookups and updates return `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The submitted product broke one or more rules. Re-present the form.
    #[error("Invalid product: {0}")]
    Validation(ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Validation(v) => ProductError::Validation(v),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
