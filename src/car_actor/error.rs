//! Error types for the Car actor.

use thiserror::Error;

use crate::framework::{FrameworkError, ValidationError};

/// Errors that can occur during car operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CarError {
    /// Only raised when no car was supplied at all.
    #[error("Invalid car: {0}")]
    Validation(ValidationError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CarError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Validation(v) => CarError::Validation(v),
            other => CarError::ActorCommunicationError(other.to_string()),
        }
    }
}
