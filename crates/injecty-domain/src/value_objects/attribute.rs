//! Attribute values declared by configuration units

use std::borrow::Cow;
use std::fmt;

/// A loosely-typed attribute value carried by a configuration unit descriptor.
///
/// Units declared in code use [`AttributeValue::Int`] for their priority;
/// descriptors built with `ConfigurationUnit::with_priority` may carry any
/// kind, which the validator then rejects with a typed error.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i32),
    /// Floating point value
    Float(f64),
    /// String value
    Str(Cow<'static, str>),
}

impl AttributeValue {
    /// Name of the value's kind, as reported in validation errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
        }
    }

    /// Integer payload, if this is an integer
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&'static str> for AttributeValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value:?}"),
        }
    }
}
