//! # Framework Errors
//!
//! This module defines the error types shared by every resource type.
//!
//! "Not found" is deliberately absent: lookups and updates return `Option` instead.

use std::fmt;

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The form field the rule applies to, or `None` for record-level rules.
    pub field: Option<&'static str>,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn record(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Aggregated validation failure: every rule violated by one validation attempt,
/// in rule order.
///
/// Always recoverable; callers re-present the original input with these messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.messages().collect();
        write!(f, "validation failed: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Failure for a record that was never supplied.
    pub fn missing(kind: &str) -> Self {
        Self::new(vec![FieldViolation::record(format!(
            "{kind} must not be null"
        ))])
    }

    /// Turns a list of collected violations into a result.
    pub fn check(violations: Vec<FieldViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self::new(violations))
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.message.as_str())
    }

    /// Messages attached to one form field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.field == Some(field))
            .map(|v| v.message.as_str())
    }
}

/// Errors that can occur at the actor boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_messages_in_order() {
        let err = ValidationError::new(vec![
            FieldViolation::new("name", "name bad"),
            FieldViolation::new("quantity", "quantity bad"),
        ]);
        assert_eq!(err.to_string(), "validation failed: name bad; quantity bad");
    }

    #[test]
    fn for_field_filters_by_field() {
        let err = ValidationError::new(vec![
            FieldViolation::new("name", "name bad"),
            FieldViolation::new("quantity", "quantity bad"),
        ]);
        assert_eq!(err.for_field("quantity").collect::<Vec<_>>(), vec!["quantity bad"]);
        assert_eq!(err.for_field("color").count(), 0);
    }

    #[test]
    fn check_is_ok_without_violations() {
        assert!(ValidationError::check(Vec::new()).is_ok());
        assert!(ValidationError::check(vec![FieldViolation::record("x")]).is_err());
    }

    #[test]
    fn missing_is_a_record_level_violation() {
        let err = ValidationError::missing("Car");
        assert_eq!(err.violations(), &[FieldViolation::record("Car must not be null")]);
    }
}
