//! Validation-function dispatch: parameter binding and the function registry

use log::trace;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::context::{ContextError, FunctionContext};
use crate::model::{Collection, FieldRef, FormValue, ValueType};
use crate::registry::signature::{Directive, FunctionSignature, ParameterSpec};

/// Result type for function operations
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Function binding and evaluation errors
///
/// The three directive failures (evaluation, reference resolution,
/// conversion) are distinct kinds so callers can name the offending
/// parameter and position in diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// Unsupported argument count
    #[error("Function '{name}' accepts {expected}, got {actual} arguments")]
    InvalidArity {
        /// Function name
        name: String,
        /// Accepted shapes, rendered
        expected: String,
        /// Actual argument count
        actual: usize,
    },

    /// A required parameter received no value
    #[error("Function '{name}' parameter '{parameter}' (position {position}) is required")]
    MissingParameter {
        /// Function name
        name: String,
        /// Parameter name
        parameter: String,
        /// Zero-based argument position
        position: usize,
    },

    /// Expression evaluation of an argument failed
    #[error("Function '{name}' parameter '{parameter}': {message}")]
    EvaluationFailed {
        /// Function name
        name: String,
        /// Parameter name
        parameter: String,
        /// Evaluator failure message
        message: String,
    },

    /// A reference inside an argument could not be resolved
    #[error("Function '{name}' parameter '{parameter}': unresolved reference '{reference}'")]
    ReferenceResolution {
        /// Function name
        name: String,
        /// Parameter name
        parameter: String,
        /// The offending reference
        reference: FieldRef,
    },

    /// An argument could not be converted to the declared parameter type
    #[error("Function '{name}' parameter '{parameter}': cannot convert {from} to {to}")]
    ConversionFailed {
        /// Function name
        name: String,
        /// Parameter name
        parameter: String,
        /// Source type name
        from: String,
        /// Target type
        to: ValueType,
    },

    /// A bound argument does not carry the declared parameter type
    #[error("Function '{name}' parameter '{parameter}' expects {expected}, got {actual}")]
    TypeMismatch {
        /// Function name
        name: String,
        /// Parameter name
        parameter: String,
        /// Declared type
        expected: ValueType,
        /// Actual type name
        actual: String,
    },

    /// Paired list arguments differ in length
    #[error("Function '{name}': values count ({values}) does not match labels count ({labels})")]
    CountMismatch {
        /// Function name
        name: String,
        /// Length of the values list
        values: usize,
        /// Length of the labels list
        labels: usize,
    },

    /// Invalid static configuration, raised at construction time
    #[error("Function '{name}' construction failed: {message}")]
    Construction {
        /// Function name
        name: String,
        /// Failure description
        message: String,
    },
}

impl FunctionError {
    /// Create an invalid-arity error from a signature
    pub fn invalid_arity(signature: &FunctionSignature, actual: usize) -> Self {
        Self::InvalidArity {
            name: signature.name.clone(),
            expected: signature.expected_shapes(),
            actual,
        }
    }

    /// Create a construction error
    pub fn construction(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Construction {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Trait for implementing validation functions
///
/// Implementations supply their signature, declare their own purity, and
/// write the body against fully bound arguments; the provided [`apply`]
/// performs arity selection and per-parameter binding before calling
/// [`invoke`].
///
/// [`apply`]: ValidationFunction::apply
/// [`invoke`]: ValidationFunction::invoke
pub trait ValidationFunction: Send + Sync {
    /// Get the function name
    fn name(&self) -> &str;

    /// Get the function signature
    fn signature(&self) -> &FunctionSignature;

    /// Whether results may be cached across invocations with equal arguments
    ///
    /// Purity is declared, never inferred: a function whose output depends on
    /// state not reflected in its arguments declares itself impure
    /// unconditionally.
    fn is_pure(&self) -> bool;

    /// Evaluate the function body with bound arguments
    fn invoke(
        &self,
        args: &[FormValue],
        context: &dyn FunctionContext,
    ) -> FunctionResult<FormValue>;

    /// Get function documentation
    fn documentation(&self) -> &str {
        ""
    }

    /// Bind raw arguments and evaluate the function
    ///
    /// Selects the parameter list matching the argument count (unsupported
    /// counts fail with the accepted shapes listed), applies each parameter's
    /// directives in order Evaluate → ResolveReferences → Convert, checks the
    /// declared type, and invokes the body.
    fn apply(
        &self,
        raw: &[FormValue],
        context: &dyn FunctionContext,
    ) -> FunctionResult<FormValue> {
        let signature = self.signature();
        let shape = signature
            .shape_for(raw.len())
            .ok_or_else(|| FunctionError::invalid_arity(signature, raw.len()))?;

        trace!(
            "binding {} argument(s) for '{}'",
            raw.len(),
            signature.name
        );

        let mut bound = Vec::with_capacity(raw.len());
        for (position, (spec, arg)) in shape.parameters.iter().zip(raw.iter()).enumerate() {
            bound.push(bind_parameter(self.name(), spec, position, arg, context)?);
        }
        self.invoke(&bound, context)
    }
}

/// Bind one raw argument against its parameter specification
fn bind_parameter(
    function: &str,
    spec: &ParameterSpec,
    position: usize,
    raw: &FormValue,
    context: &dyn FunctionContext,
) -> FunctionResult<FormValue> {
    if matches!(raw, FormValue::Empty) {
        return Err(FunctionError::MissingParameter {
            name: function.to_string(),
            parameter: spec.name.clone(),
            position,
        });
    }

    let mut value = raw.clone();

    if spec.has_directive(Directive::Evaluate) {
        value = context
            .evaluate(&value)
            .map_err(|err| FunctionError::EvaluationFailed {
                name: function.to_string(),
                parameter: spec.name.clone(),
                message: err.to_string(),
            })?;
    }

    if spec.has_directive(Directive::ResolveReferences) {
        value = resolve_references(function, spec, value, context)?;
    }

    if spec.has_directive(Directive::Convert) {
        value = match context.convert(value, spec.expected_type) {
            Ok(converted) => converted,
            Err(ContextError::Conversion { from, to }) => {
                return Err(FunctionError::ConversionFailed {
                    name: function.to_string(),
                    parameter: spec.name.clone(),
                    from,
                    to,
                });
            }
            Err(err) => {
                return Err(FunctionError::EvaluationFailed {
                    name: function.to_string(),
                    parameter: spec.name.clone(),
                    message: err.to_string(),
                });
            }
        };
    }

    let actual = value.value_type();
    if !spec.expected_type.is_compatible_with(&actual) {
        return Err(FunctionError::TypeMismatch {
            name: function.to_string(),
            parameter: spec.name.clone(),
            expected: spec.expected_type,
            actual: value.type_name().to_string(),
        });
    }

    Ok(value)
}

/// Replace reference leaves inside a value with their current field values
///
/// Applies to aggregate parameters whose elements may be references; a bare
/// reference argument resolves the same way. A reference unknown to the
/// context aborts the binding; a known-but-unset field resolves to
/// [`FormValue::Empty`], keeping positional pairing intact.
fn resolve_references(
    function: &str,
    spec: &ParameterSpec,
    value: FormValue,
    context: &dyn FunctionContext,
) -> FunctionResult<FormValue> {
    match value {
        FormValue::Reference(reference) => match context.resolve(&reference) {
            Some(Some(resolved)) => Ok(resolved),
            Some(None) => Ok(FormValue::Empty),
            None => Err(FunctionError::ReferenceResolution {
                name: function.to_string(),
                parameter: spec.name.clone(),
                reference,
            }),
        },
        FormValue::Collection(items) => {
            let mut resolved = Vec::with_capacity(items.len());
            for item in items {
                resolved.push(resolve_references(function, spec, item, context)?);
            }
            Ok(FormValue::Collection(Collection::from_vec(resolved)))
        }
        other => Ok(other),
    }
}

/// Registry for validation functions
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, Arc<dyn ValidationFunction>>,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            functions: FxHashMap::default(),
        }
    }

    /// Register a function under its own name
    pub fn register<F: ValidationFunction + 'static>(&mut self, function: F) {
        self.functions
            .insert(function.name().to_string(), Arc::new(function));
    }

    /// Get a function by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ValidationFunction>> {
        self.functions.get(name).cloned()
    }

    /// Check if a function exists
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Get all registered function names
    pub fn function_names(&self) -> Vec<&str> {
        self.functions.keys().map(|s| s.as_str()).collect()
    }
}

/// Register the built-in validation functions
///
/// `requiredFormFields` is configured per form with its required references,
/// so callers construct and register it themselves.
pub fn register_builtin_functions(registry: &mut FunctionRegistry) {
    registry.register(crate::registry::functions::GetValidatorFunction);
    registry.register(crate::registry::functions::ChoiceListFunction::new());
}
