//! Function signatures: parameter specifications and arity shapes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ValueType;

/// Pre-processing step applied to a raw argument before the function body runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Directive {
    /// Convert the (evaluated) value to the parameter's declared type
    Convert,
    /// Force an unevaluated expression to a value
    Evaluate,
    /// Resolve reference-typed leaves to their current values
    ResolveReferences,
}

/// Description of one formal parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name
    pub name: String,
    /// Declared type the bound value must carry
    pub expected_type: ValueType,
    /// Pre-processing directives, applied Evaluate → ResolveReferences → Convert
    pub directives: Vec<Directive>,
}

impl ParameterSpec {
    /// Create a parameter with no directives
    pub fn new(name: impl Into<String>, expected_type: ValueType) -> Self {
        Self {
            name: name.into(),
            expected_type,
            directives: Vec::new(),
        }
    }

    /// Add the evaluate directive
    pub fn evaluated(mut self) -> Self {
        self.directives.push(Directive::Evaluate);
        self
    }

    /// Add the convert directive
    pub fn converted(mut self) -> Self {
        self.directives.push(Directive::Convert);
        self
    }

    /// Add the resolve-references directive
    pub fn resolving_references(mut self) -> Self {
        self.directives.push(Directive::ResolveReferences);
        self
    }

    /// Whether the parameter carries a directive
    pub fn has_directive(&self, directive: Directive) -> bool {
        self.directives.contains(&directive)
    }
}

/// One accepted parameter list of a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArityShape {
    /// Parameters in positional order
    pub parameters: Vec<ParameterSpec>,
}

impl ArityShape {
    /// Create a shape from a parameter list
    pub fn new(parameters: Vec<ParameterSpec>) -> Self {
        Self { parameters }
    }

    /// Number of parameters this shape accepts
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A function's name and its accepted call shapes
///
/// The shape map is an explicit, finite arity → parameter-list mapping; a
/// call with an unsupported argument count never falls through to some
/// nearby shape, it fails with the accepted shapes listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Function name
    pub name: String,
    /// Accepted shapes, one per supported arity
    pub shapes: Vec<ArityShape>,
}

impl FunctionSignature {
    /// Create a signature with a single accepted shape
    pub fn new(name: impl Into<String>, parameters: Vec<ParameterSpec>) -> Self {
        Self {
            name: name.into(),
            shapes: vec![ArityShape::new(parameters)],
        }
    }

    /// Create a signature with several accepted shapes
    pub fn overloaded(name: impl Into<String>, shapes: Vec<ArityShape>) -> Self {
        Self {
            name: name.into(),
            shapes,
        }
    }

    /// The shape matching an argument count, if the count is supported
    pub fn shape_for(&self, arity: usize) -> Option<&ArityShape> {
        self.shapes.iter().find(|s| s.arity() == arity)
    }

    /// Render the accepted shapes for error messages, e.g. `"(values) or (labels, values)"`
    pub fn expected_shapes(&self) -> String {
        let rendered: Vec<String> = self
            .shapes
            .iter()
            .map(|shape| {
                let names: Vec<&str> =
                    shape.parameters.iter().map(|p| p.name.as_str()).collect();
                format!("({})", names.join(", "))
            })
            .collect();
        rendered.join(" or ")
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, shape) in self.shapes.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}(", self.name)?;
            for (j, param) in shape.parameters.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", param.name, param.expected_type)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
