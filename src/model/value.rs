//! Core value types for validation-function arguments and results

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::choice::ValidationChoiceList;
use super::error::ValidationErrorList;
use super::form::{FieldRef, FormField};
use super::types::ValueType;

/// Core value type flowing through validation functions
///
/// Raw argument lists hold these before binding; a raw argument may be an
/// unevaluated [`Expression`] that the context's evaluator forces to a value
/// when the parameter carries the evaluate directive. Bound arguments and
/// results are always plain values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormValue {
    /// Boolean value
    Boolean(bool),

    /// Integer value (64-bit signed)
    Integer(i64),

    /// Decimal value with arbitrary precision
    Decimal(Decimal),

    /// String value
    String(String),

    /// Reference to a field, resolvable through the context
    Reference(FieldRef),

    /// Ordered collection of values
    Collection(Collection),

    /// A form's field list
    Fields(Vec<FormField>),

    /// A validation choice list
    Choices(ValidationChoiceList),

    /// A validation error list
    Errors(ValidationErrorList),

    /// An unevaluated expression
    Expression(Expression),

    /// Absent value
    Empty,
}

/// Collection type that wraps a vector of values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection(Vec<FormValue>);

impl Collection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a collection from a vector
    pub fn from_vec(values: Vec<FormValue>) -> Self {
        Self(values)
    }

    /// Get the length of the collection
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get an iterator over the values
    pub fn iter(&self) -> std::slice::Iter<'_, FormValue> {
        self.0.iter()
    }

    /// Push a value to the collection
    pub fn push(&mut self, value: FormValue) {
        self.0.push(value);
    }

    /// Get an element by index
    pub fn get(&self, index: usize) -> Option<&FormValue> {
        self.0.get(index)
    }

    /// Get the first value
    pub fn first(&self) -> Option<&FormValue> {
        self.0.first()
    }

    /// Take ownership of the inner vector
    pub fn into_vec(self) -> Vec<FormValue> {
        self.0
    }
}

impl From<Vec<FormValue>> for Collection {
    fn from(values: Vec<FormValue>) -> Self {
        Self(values)
    }
}

impl IntoIterator for Collection {
    type Item = FormValue;
    type IntoIter = std::vec::IntoIter<FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a FormValue;
    type IntoIter = std::slice::Iter<'a, FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Opaque unevaluated expression
///
/// Only the context's evaluator interprets the source text; this crate treats
/// it as an inert handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expression(String);

impl Expression {
    /// Create an expression from source text
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The expression source text
    pub fn source(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FormValue {
    /// Create a collection from a vector of values
    pub fn collection(values: Vec<FormValue>) -> Self {
        Self::Collection(Collection::from_vec(values))
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create an unevaluated expression value
    pub fn expression(source: impl Into<String>) -> Self {
        Self::Expression(Expression::new(source))
    }

    /// Check if the value is absent (Empty or an empty collection)
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Collection(items) => items.is_empty(),
            _ => false,
        }
    }

    /// The value's type tag
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Boolean(_) => ValueType::Boolean,
            Self::Integer(_) => ValueType::Integer,
            Self::Decimal(_) => ValueType::Decimal,
            Self::String(_) => ValueType::String,
            Self::Reference(_) => ValueType::Reference,
            Self::Collection(_) => ValueType::Collection,
            Self::Fields(_) => ValueType::Fields,
            Self::Choices(_) => ValueType::Choices,
            Self::Errors(_) => ValueType::Errors,
            // Unevaluated expressions and absent values have no shape of
            // their own; Any lets them through until a directive forces them.
            Self::Expression(_) | Self::Empty => ValueType::Any,
        }
    }

    /// Human-readable name of the value's type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
            Self::String(_) => "String",
            Self::Reference(_) => "Reference",
            Self::Collection(_) => "Collection",
            Self::Fields(_) => "Fields",
            Self::Choices(_) => "Choices",
            Self::Errors(_) => "Errors",
            Self::Expression(_) => "Expression",
            Self::Empty => "Empty",
        }
    }

    /// Render the value as a display string, if it has a natural rendering
    pub fn to_string_value(&self) -> Option<String> {
        match self {
            Self::Boolean(b) => Some(b.to_string()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Decimal(d) => Some(d.to_string()),
            Self::String(s) => Some(s.clone()),
            Self::Reference(r) => Some(r.to_string()),
            _ => None,
        }
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for FormValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Reference(r) => write!(f, "@{r}"),
            Self::Collection(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Fields(fields) => write!(f, "<{} fields>", fields.len()),
            Self::Choices(choices) => write!(f, "<{} choices>", choices.len()),
            Self::Errors(errors) => write!(f, "<{} errors>", errors.len()),
            Self::Expression(e) => write!(f, "{{{e}}}"),
            Self::Empty => write!(f, ""),
        }
    }
}
