//! Shared test context implementing the caller-supplied capabilities
#![allow(dead_code)]

use std::collections::HashMap;

use formval::{
    ContextError, ContextResult, FieldRef, Form, FormField, FormValue, FunctionContext, ValueType,
};

/// Context backed by fixed maps
///
/// Expressions evaluate by source-text lookup; references resolve against a
/// field map where `Some(None)` is known-but-unset.
pub struct TestContext {
    form: Form,
    fields: HashMap<FieldRef, Option<FormValue>>,
    expressions: HashMap<String, FormValue>,
    validators: HashMap<FieldRef, FormValue>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            form: Form::empty("test-form"),
            fields: HashMap::new(),
            expressions: HashMap::new(),
            validators: HashMap::new(),
        }
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.form = form;
        self
    }

    pub fn with_field(mut self, reference: &str, value: Option<FormValue>) -> Self {
        self.fields.insert(FieldRef::from(reference), value);
        self
    }

    pub fn with_expression(mut self, source: &str, result: FormValue) -> Self {
        self.expressions.insert(source.to_string(), result);
        self
    }

    pub fn with_validator(mut self, reference: &str, validator: FormValue) -> Self {
        self.validators.insert(FieldRef::from(reference), validator);
        self
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionContext for TestContext {
    fn evaluate(&self, raw: &FormValue) -> ContextResult<FormValue> {
        match raw {
            FormValue::Expression(e) => self
                .expressions
                .get(e.source())
                .cloned()
                .ok_or_else(|| ContextError::evaluation(format!("unknown expression '{e}'"))),
            other => Ok(other.clone()),
        }
    }

    fn resolve(&self, reference: &FieldRef) -> Option<Option<FormValue>> {
        self.fields.get(reference).cloned()
    }

    fn convert(&self, value: FormValue, target: ValueType) -> ContextResult<FormValue> {
        if target == ValueType::Any || target.is_compatible_with(&value.value_type()) {
            return Ok(value);
        }
        if target == ValueType::String {
            return value
                .to_string_value()
                .map(FormValue::String)
                .ok_or_else(|| ContextError::conversion(value.type_name(), target));
        }
        Err(ContextError::conversion(value.type_name(), target))
    }

    fn current_form(&self) -> &Form {
        &self.form
    }

    fn field_value(&self, reference: &FieldRef) -> Option<FormValue> {
        self.fields.get(reference).cloned().flatten()
    }

    fn field_validator(&self, reference: &FieldRef) -> Option<FormValue> {
        self.validators.get(reference).cloned()
    }

    fn save_field_values(&self, _fields: &[FormField]) -> ContextResult<FormValue> {
        Ok(FormValue::Boolean(true))
    }
}
