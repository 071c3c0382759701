//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ImplType`] | Copyable descriptor of an implementation registered against a base |
//! | [`AttributeValue`] | Loosely-typed attribute declared by a configuration unit |

/// Configuration unit attribute values
pub mod attribute;
/// Implementation type descriptors
pub mod implementation;

pub use attribute::AttributeValue;
pub use implementation::ImplType;
