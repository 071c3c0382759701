//! Configuration unit validation
//!
//! Checks a candidate unit against the structural contract:
//!
//! 1. A `priority` attribute that is an integer
//! 2. A `configure` procedure that accepts the context
//!
//! Validation is pure; it never runs the procedure.

use injecty_domain::constants::CONFIGURE_MIN_ARITY;
use injecty_domain::{Error, Result};
use tracing::{debug, error};

use super::{Configure, ConfigurationUnit, ConfigureFn};

/// A unit that passed validation, with its attributes in typed form
#[derive(Clone)]
pub struct ValidatedUnit {
    unit: ConfigurationUnit,
    priority: i32,
    configure: ConfigureFn,
}

impl ValidatedUnit {
    /// The unit as discovered
    pub fn unit(&self) -> &ConfigurationUnit {
        &self.unit
    }

    /// Unit name
    pub fn name(&self) -> &str {
        self.unit.name()
    }

    /// Integer priority
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Context procedure
    pub fn configure_fn(&self) -> ConfigureFn {
        self.configure
    }

    /// Give back the unchanged unit
    pub fn into_inner(self) -> ConfigurationUnit {
        self.unit
    }
}

impl std::fmt::Debug for ValidatedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedUnit")
            .field("name", &self.unit.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Validate `unit`, returning it unchanged alongside its typed attributes.
pub fn validate(unit: ConfigurationUnit) -> Result<ValidatedUnit> {
    debug!(unit = unit.name(), "Validating configuration unit");

    let priority = match &unit.priority {
        None => {
            error!(unit = unit.name(), "Unit missing required 'priority' attribute");
            return Err(Error::missing_priority(unit.name()));
        }
        Some(value) => match value.as_int() {
            Some(priority) => priority,
            None => {
                error!(
                    unit = unit.name(),
                    found = value.kind(),
                    "Unit has invalid 'priority' attribute"
                );
                return Err(Error::invalid_priority_type(unit.name(), value.kind()));
            }
        },
    };

    let configure = match unit.configure {
        None => {
            error!(unit = unit.name(), "Unit missing required 'configure' method");
            return Err(Error::missing_configure(unit.name()));
        }
        Some(Configure::WithContext(procedure)) => procedure,
        Some(other @ Configure::Nullary(_)) => {
            error!(
                unit = unit.name(),
                expected = CONFIGURE_MIN_ARITY,
                got = other.arity(),
                "Unit has invalid 'configure' method"
            );
            return Err(Error::invalid_configure_signature(
                unit.name(),
                other.arity(),
            ));
        }
    };

    Ok(ValidatedUnit {
        unit,
        priority,
        configure,
    })
}
