//! Shape-level type tags used for parameter binding checks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag for form values
///
/// Binding checks are shape-level: a bound argument either carries the tag a
/// parameter declares, or the parameter declares [`ValueType::Any`] and
/// accepts everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Boolean value
    Boolean,
    /// Integer value
    Integer,
    /// Decimal value
    Decimal,
    /// String value
    String,
    /// Field reference
    Reference,
    /// Ordered collection of values
    Collection,
    /// A form's field list
    Fields,
    /// A validation choice list
    Choices,
    /// A validation error list
    Errors,
    /// Any value
    Any,
}

impl ValueType {
    /// Check whether a value of type `actual` satisfies this declared type
    pub fn is_compatible_with(&self, actual: &ValueType) -> bool {
        *self == ValueType::Any || self == actual
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Boolean => "Boolean",
            ValueType::Integer => "Integer",
            ValueType::Decimal => "Decimal",
            ValueType::String => "String",
            ValueType::Reference => "Reference",
            ValueType::Collection => "Collection",
            ValueType::Fields => "Fields",
            ValueType::Choices => "Choices",
            ValueType::Errors => "Errors",
            ValueType::Any => "Any",
        };
        write!(f, "{name}")
    }
}
