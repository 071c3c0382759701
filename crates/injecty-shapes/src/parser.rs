//! Discriminator-based shape parsing
//!
//! ```text
//! {"type": "Square", "length": 2}
//!      │                 │
//!      │                 └── remaining fields ──► Square::create
//!      └── filter impls(dyn Shape) by name ──► highest priority match
//! ```

use injecty::{Error, InjectyContext, Query};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::{Shape, ShapeArgs};

/// Field naming the shape implementation
pub const TYPE_FIELD: &str = "type";

/// Failure turning a JSON value into a shape
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not a JSON object
    #[error("shape must be a JSON object, got {found}")]
    NotAnObject {
        /// JSON kind that was found
        found: &'static str,
    },

    /// The object has no string `type` field
    #[error("shape is missing the 'type' discriminator")]
    MissingType,

    /// No registered implementation carries the requested name
    #[error("no_implementation_for:{0}")]
    UnknownType(String),

    /// The input document is not an array of shapes
    #[error("expected a JSON array of shapes")]
    NotAnArray,

    /// Lookup or construction failed in the registry
    #[error(transparent)]
    Registry(#[from] Error),
}

/// Build the shape described by `value`
pub fn parse_shape(context: &InjectyContext, value: &Value) -> Result<Box<dyn Shape>, ParseError> {
    let Value::Object(fields) = value else {
        return Err(ParseError::NotAnObject {
            found: json_kind(value),
        });
    };

    let mut args: ShapeArgs = fields.clone();
    let shape_type = match args.remove(TYPE_FIELD) {
        Some(Value::String(name)) => name,
        _ => return Err(ParseError::MissingType),
    };
    debug!(shape_type = shape_type.as_str(), "Parsing shape");

    let query = Query::<dyn Shape>::new().filter(|candidate| candidate.name() == shape_type);
    context
        .get_new_default_instance(&args, &query)
        .map_err(|err| match err {
            Error::NoImplementationsFound { .. } => ParseError::UnknownType(shape_type.clone()),
            other => ParseError::Registry(other),
        })
}

/// Build every shape of a JSON array, stopping at the first failure
pub fn parse_shapes(
    context: &InjectyContext,
    document: &Value,
) -> Result<Vec<Box<dyn Shape>>, ParseError> {
    document
        .as_array()
        .ok_or(ParseError::NotAnArray)?
        .iter()
        .map(|value| parse_shape(context, value))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
