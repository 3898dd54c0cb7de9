//! requiredFormFields() - flags required fields submitted without a value

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

use crate::context::FunctionContext;
use crate::model::{FieldRef, FormValue, ValidationError, ValidationErrorList, ValueType};
use crate::registry::function::{FunctionError, FunctionResult, ValidationFunction};
use crate::registry::signature::{FunctionSignature, ParameterSpec};

/// Message attached to every missing required field
const REQUIRED_MESSAGE: &str = "Required";

/// requiredFormFields(fields) - checks a field list against a required set
///
/// Configured at construction with the non-empty set of required references.
/// Only fields present in the input list are checked: a required reference
/// that never appears in the submitted list produces no error.
#[derive(Debug)]
pub struct RequiredFormFieldsFunction {
    required: FxHashSet<FieldRef>,
}

impl RequiredFormFieldsFunction {
    /// Create the function from a non-empty set of required references
    ///
    /// An empty set is a programming error by the caller and fails here,
    /// before any evaluation.
    pub fn new(required: FxHashSet<FieldRef>) -> FunctionResult<Self> {
        if required.is_empty() {
            return Err(FunctionError::construction(
                "requiredFormFields",
                "required reference set must not be empty",
            ));
        }
        Ok(Self { required })
    }

    /// The configured required references
    pub fn required(&self) -> &FxHashSet<FieldRef> {
        &self.required
    }
}

impl ValidationFunction for RequiredFormFieldsFunction {
    fn name(&self) -> &str {
        "requiredFormFields"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "requiredFormFields",
                vec![
                    ParameterSpec::new("fields", ValueType::Fields)
                        .converted()
                        .evaluated(),
                ],
            )
        });
        &SIG
    }

    fn is_pure(&self) -> bool {
        true
    }

    fn invoke(
        &self,
        args: &[FormValue],
        _context: &dyn FunctionContext,
    ) -> FunctionResult<FormValue> {
        let fields = match args {
            [FormValue::Fields(fields)] => fields,
            [other] => {
                return Err(FunctionError::TypeMismatch {
                    name: self.name().to_string(),
                    parameter: "fields".to_string(),
                    expected: ValueType::Fields,
                    actual: other.type_name().to_string(),
                });
            }
            _ => return Err(FunctionError::invalid_arity(self.signature(), args.len())),
        };

        let errors: ValidationErrorList = fields
            .iter()
            .filter(|field| self.required.contains(field.reference()) && !field.has_value())
            .map(|field| ValidationError::new(field.reference().clone(), REQUIRED_MESSAGE))
            .collect();
        Ok(FormValue::Errors(errors))
    }

    fn documentation(&self) -> &str {
        "requiredFormFields(fields) - Emits one 'Required' error per listed field that is required but has no value"
    }
}
