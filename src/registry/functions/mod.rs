//! Built-in validation functions

pub mod choice;
pub mod required;
pub mod validator;

pub use choice::ChoiceListFunction;
pub use required::RequiredFormFieldsFunction;
pub use validator::GetValidatorFunction;
