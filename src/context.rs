//! Capability interface supplied by the caller of validation functions

use thiserror::Error;

use crate::model::{FieldRef, Form, FormField, FormValue, ValueType};

/// Result type for context operations
pub type ContextResult<T> = Result<T, ContextError>;

/// Failures raised by a context capability
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContextError {
    /// Expression evaluation failed
    #[error("evaluation failed: {message}")]
    Evaluation {
        /// Evaluator failure message
        message: String,
    },

    /// A value could not be converted to the target type
    #[error("cannot convert {from} to {to}")]
    Conversion {
        /// Source type name
        from: String,
        /// Target type
        to: ValueType,
    },

    /// A field reference is not known to the context
    #[error("unresolved reference '{reference}'")]
    UnresolvedReference {
        /// The offending reference
        reference: FieldRef,
    },

    /// The save callback failed
    #[error("save failed: {message}")]
    Save {
        /// Save failure message
        message: String,
    },
}

impl ContextError {
    /// Create an evaluation error
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation {
            message: message.into(),
        }
    }

    /// Create a conversion error
    pub fn conversion(from: impl Into<String>, to: ValueType) -> Self {
        Self::Conversion {
            from: from.into(),
            to,
        }
    }

    /// Create an unresolved-reference error
    pub fn unresolved(reference: FieldRef) -> Self {
        Self::UnresolvedReference { reference }
    }
}

/// Capabilities a caller supplies to validation functions
///
/// The dispatch core consumes this contract and nothing more: expression
/// evaluation, reference resolution, and type conversion feed parameter
/// binding; the form accessors serve function bodies that need field
/// metadata. Implementations are expected to be cheap to call; no method
/// suspends.
pub trait FunctionContext {
    /// Force a raw value to a plain value
    ///
    /// [`FormValue::Expression`] arguments are evaluated by the surrounding
    /// expression engine; any other value passes through unchanged.
    fn evaluate(&self, raw: &FormValue) -> ContextResult<FormValue>;

    /// Resolve a field reference to its current value
    ///
    /// Outer `None` means the reference is unknown; `Some(None)` means the
    /// field is known but has no value.
    fn resolve(&self, reference: &FieldRef) -> Option<Option<FormValue>>;

    /// Convert a value to the target type
    fn convert(&self, value: FormValue, target: ValueType) -> ContextResult<FormValue>;

    /// The form currently under validation
    fn current_form(&self) -> &Form;

    /// Current value of a field, if set
    fn field_value(&self, reference: &FieldRef) -> Option<FormValue>;

    /// The validator configured for a field, if any
    fn field_validator(&self, reference: &FieldRef) -> Option<FormValue>;

    /// Persist field values through the caller's save path
    fn save_field_values(&self, fields: &[FormField]) -> ContextResult<FormValue>;

    /// Locale tag for label rendering
    fn locale(&self) -> &str {
        "en"
    }
}
