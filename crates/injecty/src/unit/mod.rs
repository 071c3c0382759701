//! Configuration Units
//!
//! A configuration unit is a named descriptor that registers and
//! deregisters implementations when a context is configured. Units are
//! discovered through a [`UnitDiscovery`] adapter, checked by
//! [`validate`], ordered by priority and applied one after another.
//!
//! ## Declaring a unit
//!
//! ```ignore
//! use injecty::unit::{CONFIGURATION_UNITS, ConfigurationUnit};
//!
//! fn configure(context: &mut InjectyContext) -> Result<(), BoxError> {
//!     context.register_impl::<dyn Shape, Square>();
//!     Ok(())
//! }
//!
//! #[linkme::distributed_slice(CONFIGURATION_UNITS)]
//! static SHAPES: ConfigurationUnit = ConfigurationUnit::new("injecty_config_shapes", 100, configure);
//! ```

pub mod discovery;
pub mod validator;

use std::borrow::Cow;
use std::fmt;

use injecty_domain::{AttributeValue, BoxError};

use crate::context::InjectyContext;

pub use discovery::{
    CONFIGURATION_UNITS, LinkmeDiscovery, StaticDiscovery, UnitDiscovery, prefix_matcher,
};
pub use validator::{ValidatedUnit, validate};

/// Procedure a unit runs against the context being configured
pub type ConfigureFn = fn(&mut InjectyContext) -> Result<(), BoxError>;

/// The `configure` attribute of a unit
#[derive(Clone, Copy)]
pub enum Configure {
    /// Procedure receiving the context
    WithContext(ConfigureFn),
    /// Procedure declared without the context parameter
    Nullary(fn() -> Result<(), BoxError>),
}

impl Configure {
    /// Number of parameters the procedure accepts
    pub fn arity(&self) -> usize {
        match self {
            Self::WithContext(_) => 1,
            Self::Nullary(_) => 0,
        }
    }
}

impl fmt::Debug for Configure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configure(arity = {})", self.arity())
    }
}

/// Descriptor of a configuration unit.
///
/// `priority` and `configure` are optional so that descriptors built from
/// external sources can be represented before they are validated.
#[derive(Debug, Clone)]
pub struct ConfigurationUnit {
    /// Unit name, matched against the discovery predicate
    pub name: Cow<'static, str>,
    /// Ordering attribute; lower priorities are applied first
    pub priority: Option<AttributeValue>,
    /// Procedure applied to the context
    pub configure: Option<Configure>,
}

impl ConfigurationUnit {
    /// Well-formed unit with an integer priority and a context procedure
    pub const fn new(name: &'static str, priority: i32, configure: ConfigureFn) -> Self {
        Self {
            name: Cow::Borrowed(name),
            priority: Some(AttributeValue::Int(priority)),
            configure: Some(Configure::WithContext(configure)),
        }
    }

    /// Unit with no attributes set
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            priority: None,
            configure: None,
        }
    }

    /// Set the priority attribute
    pub fn with_priority(mut self, priority: impl Into<AttributeValue>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Set the configure attribute
    pub fn with_configure(mut self, configure: Configure) -> Self {
        self.configure = Some(configure);
        self
    }

    /// Unit name
    pub fn name(&self) -> &str {
        &self.name
    }
}
