//! Validation-function dispatch and form-definition persistence
//!
//! Two tightly related mechanisms: a typed dispatch protocol that binds raw,
//! possibly unevaluated argument lists against declared parameter
//! specifications before a function body runs, and a total-ordered in-memory
//! store for form definitions with synchronous change notification. The
//! expression evaluator, converter, and form accessors are capabilities the
//! caller supplies through [`FunctionContext`].

pub mod context;
pub mod model;
pub mod registry;
pub mod store;

// Re-export main types
pub use context::{ContextError, ContextResult, FunctionContext};
pub use model::{
    Collection, Expression, FieldRef, Form, FormField, FormName, FormValue, ValidationChoice,
    ValidationChoiceList, ValidationError, ValidationErrorList, ValueType,
};
pub use registry::{
    ChoiceListFunction, Directive, FunctionError, FunctionRegistry, FunctionResult,
    FunctionSignature, GetValidatorFunction, ParameterSpec, RequiredFormFieldsFunction,
    ValidationFunction, register_builtin_functions,
};
pub use store::{OrderedFormStore, StoreError, StoreResult, WatcherId};
