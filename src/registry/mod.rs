//! Function registry: signatures, parameter binding, and built-in functions

pub mod function;
pub mod functions;
pub mod signature;

pub use function::{
    FunctionError, FunctionRegistry, FunctionResult, ValidationFunction,
    register_builtin_functions,
};
pub use functions::{ChoiceListFunction, GetValidatorFunction, RequiredFormFieldsFunction};
pub use signature::{ArityShape, Directive, FunctionSignature, ParameterSpec};
