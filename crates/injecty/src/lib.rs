//! Injecty - Runtime Implementation Registry
//!
//! Independently linked crates contribute implementations of shared
//! extension points through configuration units; client code asks an
//! [`InjectyContext`] for every implementation of a base, or for the best
//! one by priority.
//!
//! ## Architecture
//!
//! ```text
//! unit/       discovery adapters, descriptor, validator
//! registry/   base type → ordered implementation set
//! query       filter / sort / default selection / instantiation
//! context/    configuration pass, delegations, SharedContext
//! config/     figment-backed settings
//! logging     tracing-subscriber setup
//! ```
//!
//! ## Example
//!
//! ```
//! use injecty::{BoxError, ExtensionPoint, Implementation, InjectyContext};
//!
//! pub trait Greeter {
//!     fn greet(&self) -> String;
//! }
//!
//! impl ExtensionPoint for dyn Greeter {
//!     type Args = ();
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! impl Implementation<dyn Greeter> for English {
//!     fn create(_: &()) -> Result<Box<dyn Greeter>, BoxError> {
//!         Ok(Box::new(English))
//!     }
//! }
//!
//! let mut context = InjectyContext::new();
//! context.register_impl::<dyn Greeter, English>();
//! let greeter = context.new_default_instance::<dyn Greeter>(&()).unwrap();
//! assert_eq!(greeter.greet(), "hello");
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod logging;
pub mod query;
pub mod registry;
pub mod unit;

pub use config::{ConfigLoader, DiscoveryConfig, InjectyConfig, LoggingConfig};
pub use context::{
    ContextState, InjectyContext, SharedContext, create_injecty_context,
    create_injecty_context_with,
};
pub use injecty_domain::{
    AttributeValue, BoxError, Error, ExtensionPoint, ImplType, Implementation, Result,
};
pub use query::{Query, QueryEngine};
pub use registry::ImplementationRegistry;
pub use unit::{
    CONFIGURATION_UNITS, Configure, ConfigurationUnit, LinkmeDiscovery, StaticDiscovery,
    UnitDiscovery,
};
