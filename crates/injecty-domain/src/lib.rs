//! Domain Layer - Injecty
//!
//! Core contracts and types of the Injecty implementation registry.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines the extension point contracts ([`ports`])
//! - Defines the runtime descriptors of implementations ([`value_objects`])
//! - Defines the error taxonomy shared by every layer ([`error`])
//! - Has no dependency on the registry engine or on any logging/config stack

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{BoxError, Error, Result};
pub use ports::{ExtensionPoint, Implementation};
pub use value_objects::{AttributeValue, ImplType};
