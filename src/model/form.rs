//! Form definitions: names, field references, fields, and forms

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::FormValue;

/// Unique, case-sensitive name of a form
///
/// Names order lexicographically; the store keys its total order on them.
/// The empty name is never a valid key — the store rejects it at `save`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FormName(String);

impl FormName {
    /// Create a form name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FormName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for FormName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for FormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a field within a form
///
/// Comparable and hashable; unique within a single form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldRef(String);

impl FieldRef {
    /// Create a field reference
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One field of a form: a reference paired with an optional current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    reference: FieldRef,
    value: Option<FormValue>,
}

impl FormField {
    /// Create a field with a value
    pub fn new(reference: impl Into<FieldRef>, value: FormValue) -> Self {
        Self {
            reference: reference.into(),
            value: Some(value),
        }
    }

    /// Create a field without a value
    pub fn unset(reference: impl Into<FieldRef>) -> Self {
        Self {
            reference: reference.into(),
            value: None,
        }
    }

    /// The field's reference
    pub fn reference(&self) -> &FieldRef {
        &self.reference
    }

    /// The field's current value, if set
    pub fn value(&self) -> Option<&FormValue> {
        self.value.as_ref()
    }

    /// Whether the field has a value
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

/// A named, ordered collection of fields
///
/// Forms are immutable values; [`Form::with_field`] builds a new form rather
/// than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    name: FormName,
    fields: Vec<FormField>,
}

impl Form {
    /// Create a form from a name and an ordered field list
    pub fn new(name: impl Into<FormName>, fields: Vec<FormField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Create a form with no fields
    pub fn empty(name: impl Into<FormName>) -> Self {
        Self::new(name, Vec::new())
    }

    /// The form's name
    pub fn name(&self) -> &FormName {
        &self.name
    }

    /// The fields in definition order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Look up a field by reference
    pub fn field(&self, reference: &FieldRef) -> Option<&FormField> {
        self.fields.iter().find(|f| f.reference() == reference)
    }

    /// Return a new form with `field` appended
    pub fn with_field(&self, field: FormField) -> Self {
        let mut fields = self.fields.clone();
        fields.push(field);
        Self {
            name: self.name.clone(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_names_order_lexicographically() {
        let mut names = vec![
            FormName::from("beta"),
            FormName::from("alpha"),
            FormName::from("Alpha"),
        ];
        names.sort();
        assert_eq!(
            names,
            vec![
                FormName::from("Alpha"),
                FormName::from("alpha"),
                FormName::from("beta"),
            ]
        );
    }

    #[test]
    fn with_field_leaves_original_untouched() {
        let form = Form::empty("f");
        let grown = form.with_field(FormField::unset("a"));
        assert_eq!(form.fields().len(), 0);
        assert_eq!(grown.fields().len(), 1);
        assert_eq!(grown.fields()[0].reference(), &FieldRef::from("a"));
    }

    #[test]
    fn form_survives_json_round_trip() {
        let form = Form::new(
            "address",
            vec![
                FormField::new("state", FormValue::from("ACT")),
                FormField::new("postcode", FormValue::Integer(2600)),
                FormField::unset("street"),
            ],
        );

        let json = serde_json::to_string(&form).unwrap();
        let restored: Form = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, form);
    }

    #[test]
    fn field_lookup_by_reference() {
        let form = Form::new(
            "f",
            vec![
                FormField::new("a", FormValue::Integer(1)),
                FormField::unset("b"),
            ],
        );
        assert!(form.field(&FieldRef::from("a")).unwrap().has_value());
        assert!(!form.field(&FieldRef::from("b")).unwrap().has_value());
        assert!(form.field(&FieldRef::from("c")).is_none());
    }
}
