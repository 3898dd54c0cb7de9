//! validationChoiceList() - builds choice lists from value and label lists

use std::sync::LazyLock;

use crate::context::{ContextError, FunctionContext};
use crate::model::{Collection, FormValue, ValidationChoice, ValidationChoiceList, ValueType};
use crate::registry::function::{FunctionError, FunctionResult, ValidationFunction};
use crate::registry::signature::{ArityShape, FunctionSignature, ParameterSpec};

/// validationChoiceList(values) | validationChoiceList(labels, values)
///
/// One-argument calls derive each label by converting the value to a string
/// through the context; two-argument calls pair labels and values by index
/// and require equal lengths. Output order always follows input order.
#[derive(Default)]
pub struct ChoiceListFunction;

impl ChoiceListFunction {
    /// Create the function
    pub fn new() -> Self {
        Self
    }

    fn derive_label(
        &self,
        parameter: &str,
        value: &FormValue,
        context: &dyn FunctionContext,
    ) -> FunctionResult<String> {
        match context.convert(value.clone(), ValueType::String) {
            Ok(FormValue::String(label)) => Ok(label),
            Ok(other) => Err(FunctionError::ConversionFailed {
                name: self.name().to_string(),
                parameter: parameter.to_string(),
                from: other.type_name().to_string(),
                to: ValueType::String,
            }),
            Err(ContextError::Conversion { from, to }) => Err(FunctionError::ConversionFailed {
                name: self.name().to_string(),
                parameter: parameter.to_string(),
                from,
                to,
            }),
            Err(err) => Err(FunctionError::EvaluationFailed {
                name: self.name().to_string(),
                parameter: parameter.to_string(),
                message: err.to_string(),
            }),
        }
    }

    fn list_mismatch(&self, parameter: &str, actual: &FormValue) -> FunctionError {
        FunctionError::TypeMismatch {
            name: self.name().to_string(),
            parameter: parameter.to_string(),
            expected: ValueType::Collection,
            actual: actual.type_name().to_string(),
        }
    }

    fn choice(label: String, value: &FormValue) -> ValidationChoice {
        if value.is_empty() {
            ValidationChoice::label_only(label)
        } else {
            ValidationChoice::new(label, value.clone())
        }
    }

    fn from_values(
        &self,
        values: &Collection,
        context: &dyn FunctionContext,
    ) -> FunctionResult<ValidationChoiceList> {
        let mut choices = Vec::with_capacity(values.len());
        for value in values {
            let label = self.derive_label("values", value, context)?;
            choices.push(Self::choice(label, value));
        }
        Ok(ValidationChoiceList::from_vec(choices))
    }

    fn from_labels_and_values(
        &self,
        labels: &Collection,
        values: &Collection,
        context: &dyn FunctionContext,
    ) -> FunctionResult<ValidationChoiceList> {
        if labels.len() != values.len() {
            return Err(FunctionError::CountMismatch {
                name: self.name().to_string(),
                values: values.len(),
                labels: labels.len(),
            });
        }

        let mut choices = Vec::with_capacity(values.len());
        for (label, value) in labels.iter().zip(values.iter()) {
            let label = self.derive_label("labels", label, context)?;
            choices.push(Self::choice(label, value));
        }
        Ok(ValidationChoiceList::from_vec(choices))
    }
}

impl ValidationFunction for ChoiceListFunction {
    fn name(&self) -> &str {
        "validationChoiceList"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::overloaded(
                "validationChoiceList",
                vec![
                    ArityShape::new(vec![
                        ParameterSpec::new("values", ValueType::Collection)
                            .converted()
                            .evaluated()
                            .resolving_references(),
                    ]),
                    ArityShape::new(vec![
                        ParameterSpec::new("labels", ValueType::Collection)
                            .converted()
                            .evaluated()
                            .resolving_references(),
                        ParameterSpec::new("values", ValueType::Collection)
                            .converted()
                            .evaluated()
                            .resolving_references(),
                    ]),
                ],
            )
        });
        &SIG
    }

    fn is_pure(&self) -> bool {
        // No external state beyond the arguments themselves; purity of the
        // overall expression is the evaluator's general argument-purity rule.
        true
    }

    fn invoke(
        &self,
        args: &[FormValue],
        context: &dyn FunctionContext,
    ) -> FunctionResult<FormValue> {
        let list = match args {
            [FormValue::Collection(values)] => self.from_values(values, context)?,
            [FormValue::Collection(labels), FormValue::Collection(values)] => {
                self.from_labels_and_values(labels, values, context)?
            }
            [other] | [FormValue::Collection(_), other] => {
                return Err(self.list_mismatch("values", other));
            }
            [other, _] => return Err(self.list_mismatch("labels", other)),
            _ => return Err(FunctionError::invalid_arity(self.signature(), args.len())),
        };
        Ok(FormValue::Choices(list))
    }

    fn documentation(&self) -> &str {
        "validationChoiceList(values) or validationChoiceList(labels, values) - Builds an ordered choice list; one-argument calls use each value's string rendering as its label"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::functions::testing::StubContext;

    fn strings(items: &[&str]) -> FormValue {
        FormValue::collection(items.iter().map(|s| FormValue::from(*s)).collect())
    }

    #[test]
    fn one_argument_labels_from_values() {
        let ctx = StubContext::new();
        let result = ChoiceListFunction::new()
            .apply(&[strings(&["ACT", "NSW"])], &ctx)
            .unwrap();

        let FormValue::Choices(choices) = result else {
            panic!("expected choices, got {result:?}");
        };
        assert_eq!(choices.len(), 2);
        assert_eq!(choices.get(0).unwrap().label(), "ACT");
        assert_eq!(choices.get(0).unwrap().value(), Some(&FormValue::from("ACT")));
        assert_eq!(choices.get(1).unwrap().label(), "NSW");
        assert_eq!(choices.get(1).unwrap().value(), Some(&FormValue::from("NSW")));
    }

    #[test]
    fn two_arguments_pair_by_index() {
        let ctx = StubContext::new();
        let result = ChoiceListFunction::new()
            .apply(
                &[
                    strings(&["Australian Capital Territory", "New South Wales"]),
                    strings(&["ACT", "NSW"]),
                ],
                &ctx,
            )
            .unwrap();

        let FormValue::Choices(choices) = result else {
            panic!("expected choices, got {result:?}");
        };
        assert_eq!(choices.len(), 2);
        assert_eq!(
            choices.get(0).unwrap().label(),
            "Australian Capital Territory"
        );
        assert_eq!(choices.get(0).unwrap().value(), Some(&FormValue::from("ACT")));
        assert_eq!(choices.get(1).unwrap().label(), "New South Wales");
        assert_eq!(choices.get(1).unwrap().value(), Some(&FormValue::from("NSW")));
    }

    #[test]
    fn mismatched_counts_report_both_lengths() {
        let ctx = StubContext::new();
        let err = ChoiceListFunction::new()
            .apply(&[strings(&["a", "b", "c"]), strings(&["x"])], &ctx)
            .unwrap_err();

        assert_eq!(
            err,
            FunctionError::CountMismatch {
                name: "validationChoiceList".to_string(),
                values: 1,
                labels: 3,
            }
        );
        let message = err.to_string();
        assert!(message.contains('1') && message.contains('3'), "{message}");
    }

    #[test]
    fn unsupported_arity_names_accepted_shapes() {
        let ctx = StubContext::new();
        let err = ChoiceListFunction::new()
            .apply(&[strings(&[]), strings(&[]), strings(&[])], &ctx)
            .unwrap_err();

        let FunctionError::InvalidArity { expected, actual, .. } = err else {
            panic!("expected arity error, got {err:?}");
        };
        assert_eq!(actual, 3);
        assert_eq!(expected, "(values) or (labels, values)");
    }

    #[test]
    fn resolves_reference_elements_before_labeling() {
        let ctx = StubContext::new().with_field("state", Some(FormValue::from("QLD")));
        let values = FormValue::collection(vec![FormValue::Reference("state".into())]);
        let result = ChoiceListFunction::new().apply(&[values], &ctx).unwrap();

        let FormValue::Choices(choices) = result else {
            panic!("expected choices, got {result:?}");
        };
        assert_eq!(choices.get(0).unwrap().label(), "QLD");
        assert_eq!(choices.get(0).unwrap().value(), Some(&FormValue::from("QLD")));
    }

    #[test]
    fn unknown_reference_fails_binding() {
        let ctx = StubContext::new();
        let values = FormValue::collection(vec![FormValue::Reference("missing".into())]);
        let err = ChoiceListFunction::new().apply(&[values], &ctx).unwrap_err();
        assert!(matches!(err, FunctionError::ReferenceResolution { ref reference, .. }
            if reference.as_str() == "missing"));
    }

    #[test]
    fn order_matches_input_order() {
        let ctx = StubContext::new();
        let input = ["w", "a", "z", "m"];
        let result = ChoiceListFunction::new()
            .apply(&[strings(&input)], &ctx)
            .unwrap();

        let FormValue::Choices(choices) = result else {
            panic!("expected choices, got {result:?}");
        };
        let labels: Vec<&str> = choices.iter().map(|c| c.label()).collect();
        assert_eq!(labels, input);
    }

    #[test]
    fn declared_pure() {
        assert!(ChoiceListFunction::new().is_pure());
    }
}
