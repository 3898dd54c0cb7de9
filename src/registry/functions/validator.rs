//! getValidator() - returns the bound validator selector

use std::sync::LazyLock;

use crate::context::FunctionContext;
use crate::model::{FormValue, ValueType};
use crate::registry::function::{FunctionError, FunctionResult, ValidationFunction};
use crate::registry::signature::{FunctionSignature, ParameterSpec};

/// getValidator(validator) - hands the bound selector back to the caller
///
/// Impure: the validator a selector designates may be swapped out-of-band
/// between evaluations, so results must never be cached.
pub struct GetValidatorFunction;

impl ValidationFunction for GetValidatorFunction {
    fn name(&self) -> &str {
        "getValidator"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "getValidator",
                vec![
                    ParameterSpec::new("validator", ValueType::Any)
                        .converted()
                        .evaluated(),
                ],
            )
        });
        &SIG
    }

    fn is_pure(&self) -> bool {
        false
    }

    fn invoke(
        &self,
        args: &[FormValue],
        _context: &dyn FunctionContext,
    ) -> FunctionResult<FormValue> {
        match args {
            [selector] => Ok(selector.clone()),
            _ => Err(FunctionError::invalid_arity(self.signature(), args.len())),
        }
    }

    fn documentation(&self) -> &str {
        "getValidator(validator) - Returns the resolved validator selector unchanged"
    }
}
