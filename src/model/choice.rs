//! Selectable choices for selection-style fields

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::FormValue;

/// One selectable option: a display label paired with an optional value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationChoice {
    label: String,
    value: Option<FormValue>,
}

impl ValidationChoice {
    /// Create a choice with a value
    pub fn new(label: impl Into<String>, value: FormValue) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
        }
    }

    /// Create a label-only choice
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    /// The display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The choice's value, if any
    pub fn value(&self) -> Option<&FormValue> {
        self.value.as_ref()
    }
}

impl fmt::Display for ValidationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{} ({v})", self.label),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Ordered, immutable sequence of choices
///
/// Order is display order. [`ValidationChoiceList::append`] returns a new
/// list rather than mutating.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationChoiceList(Vec<ValidationChoice>);

impl ValidationChoiceList {
    /// Create an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a list from a vector
    pub fn from_vec(choices: Vec<ValidationChoice>) -> Self {
        Self(choices)
    }

    /// Number of choices
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the choices in display order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationChoice> {
        self.0.iter()
    }

    /// Get a choice by index
    pub fn get(&self, index: usize) -> Option<&ValidationChoice> {
        self.0.get(index)
    }

    /// Return a new list with `choice` appended
    pub fn append(&self, choice: ValidationChoice) -> Self {
        let mut choices = self.0.clone();
        choices.push(choice);
        Self(choices)
    }

    /// Return a new list concatenating `other` after this list
    pub fn concat(&self, other: &ValidationChoiceList) -> Self {
        let mut choices = self.0.clone();
        choices.extend(other.0.iter().cloned());
        Self(choices)
    }
}

impl From<Vec<ValidationChoice>> for ValidationChoiceList {
    fn from(choices: Vec<ValidationChoice>) -> Self {
        Self(choices)
    }
}

impl FromIterator<ValidationChoice> for ValidationChoiceList {
    fn from_iter<I: IntoIterator<Item = ValidationChoice>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ValidationChoiceList {
    type Item = &'a ValidationChoice;
    type IntoIter = std::slice::Iter<'a, ValidationChoice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
