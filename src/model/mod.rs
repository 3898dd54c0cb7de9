//! Domain model: forms, values, choices, and validation errors

pub mod choice;
pub mod error;
pub mod form;
pub mod types;
pub mod value;

pub use choice::{ValidationChoice, ValidationChoiceList};
pub use error::{ValidationError, ValidationErrorList};
pub use form::{FieldRef, Form, FormField, FormName};
pub use types::ValueType;
pub use value::{Collection, Expression, FormValue};
