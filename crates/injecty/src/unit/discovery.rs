//! Configuration Unit Discovery
//!
//! Discovery is an injected capability: given a name predicate, produce the
//! candidate units visible in the current environment, in no particular
//! order. The context imposes the deterministic order afterwards.
//!
//! ## Adapters
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  #[linkme::distributed_slice(CONFIGURATION_UNITS)]               │
//! │  static UNIT: ConfigurationUnit = ...          (any linked crate) │
//! │                         ↓                                        │
//! │  LinkmeDiscovery  ── CONFIGURATION_UNITS.iter() ── predicate ──► │
//! │                                                                  │
//! │  StaticDiscovery  ── Vec<ConfigurationUnit>     ── predicate ──► │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Crates contributing units must be linked into the final binary; a crate
//! that is only a dev-dependency does not register its units.

use tracing::debug;

use super::ConfigurationUnit;

/// Units submitted at link time by any crate in the binary
#[linkme::distributed_slice]
pub static CONFIGURATION_UNITS: [ConfigurationUnit] = [..];

/// Capability yielding the configuration units visible to a context
pub trait UnitDiscovery {
    /// Units whose name satisfies `predicate`, in unspecified order
    fn discover(&self, predicate: &dyn Fn(&str) -> bool) -> Vec<ConfigurationUnit>;
}

impl<D: UnitDiscovery + ?Sized> UnitDiscovery for &D {
    fn discover(&self, predicate: &dyn Fn(&str) -> bool) -> Vec<ConfigurationUnit> {
        (**self).discover(predicate)
    }
}

/// Discovery over the [`CONFIGURATION_UNITS`] distributed slice
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkmeDiscovery;

impl LinkmeDiscovery {
    /// Create the link-time discovery adapter
    pub fn new() -> Self {
        Self
    }
}

impl UnitDiscovery for LinkmeDiscovery {
    fn discover(&self, predicate: &dyn Fn(&str) -> bool) -> Vec<ConfigurationUnit> {
        let units: Vec<ConfigurationUnit> = CONFIGURATION_UNITS
            .iter()
            .filter(|unit| predicate(unit.name()))
            .cloned()
            .collect();
        debug!(
            linked = CONFIGURATION_UNITS.len(),
            matched = units.len(),
            "Discovered link-time configuration units"
        );
        units
    }
}

/// Discovery over a fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticDiscovery {
    units: Vec<ConfigurationUnit>,
}

impl StaticDiscovery {
    /// Discovery yielding `units` in the given order
    pub fn new(units: impl IntoIterator<Item = ConfigurationUnit>) -> Self {
        Self {
            units: units.into_iter().collect(),
        }
    }

    /// Append a unit
    pub fn with_unit(mut self, unit: ConfigurationUnit) -> Self {
        self.units.push(unit);
        self
    }
}

impl UnitDiscovery for StaticDiscovery {
    fn discover(&self, predicate: &dyn Fn(&str) -> bool) -> Vec<ConfigurationUnit> {
        self.units
            .iter()
            .filter(|unit| predicate(unit.name()))
            .cloned()
            .collect()
    }
}

/// Predicate matching names that start with `prefix`
pub fn prefix_matcher(prefix: &str) -> impl Fn(&str) -> bool + '_ {
    move |name| name.starts_with(prefix)
}
