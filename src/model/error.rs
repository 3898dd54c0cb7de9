//! Field-scoped validation failures

use serde::{Deserialize, Serialize};
use std::fmt;

use super::form::FieldRef;

/// One validation failure, attached to exactly one field reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    reference: FieldRef,
    message: String,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(reference: impl Into<FieldRef>, message: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            message: message.into(),
        }
    }

    /// The field the error is attached to
    pub fn reference(&self) -> &FieldRef {
        &self.reference
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reference, self.message)
    }
}

/// Ordered sequence of validation errors; may be empty
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrorList(Vec<ValidationError>);

impl ValidationErrorList {
    /// Create an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a list from a vector
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Number of errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no errors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the errors in accumulation order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Get an error by index
    pub fn get(&self, index: usize) -> Option<&ValidationError> {
        self.0.get(index)
    }
}

impl From<Vec<ValidationError>> for ValidationErrorList {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<ValidationError> for ValidationErrorList {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ValidationErrorList {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
