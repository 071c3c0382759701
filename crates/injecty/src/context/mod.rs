//! Injecty Context
//!
//! The coordination point clients program against. A context owns its
//! [`ImplementationRegistry`] exclusively and drives configuration passes:
//!
//! ```text
//! discover ──► validate (fail fast) ──► sort by unit priority (stable, ascending)
//!                                               │
//!          commit ◄── configure(unit₁) … configure(unitₙ) on a staged copy
//! ```
//!
//! Lower-priority units run first, so higher-priority units can override or
//! deregister what earlier ones registered. A pass either applies every unit
//! or leaves the context untouched.

mod shared;

use injecty_domain::{Error, ExtensionPoint, ImplType, Implementation, Result};
use tracing::{debug, error, info};

use crate::config::DiscoveryConfig;
use crate::query::{Query, QueryEngine};
use crate::registry::ImplementationRegistry;
use crate::unit::{LinkmeDiscovery, UnitDiscovery, ValidatedUnit, prefix_matcher, validate};

pub use shared::SharedContext;

/// Lifecycle of a context's configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextState {
    /// No configuration pass has completed
    #[default]
    Empty,
    /// A configuration pass is running
    Configuring,
    /// At least one configuration pass has completed
    Ready,
}

/// Registry of implementations plus the configuration pass that fills it
#[derive(Debug, Clone, Default)]
pub struct InjectyContext {
    registry: ImplementationRegistry,
    state: ContextState,
}

impl InjectyContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Read access to the underlying registry
    pub fn registry(&self) -> &ImplementationRegistry {
        &self.registry
    }

    /// Query engine over the current registrations
    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.registry)
    }

    // ==========================================================================
    // Configuration
    // ==========================================================================

    /// Run a configuration pass over the units `discovery` yields for
    /// `predicate`, returning how many units were applied.
    ///
    /// Re-running a pass is permitted; registrations are idempotent.
    pub fn configure(
        &mut self,
        discovery: &dyn UnitDiscovery,
        predicate: &dyn Fn(&str) -> bool,
    ) -> Result<usize> {
        let previous = self.state;
        self.state = ContextState::Configuring;

        match self.run_pass(discovery, predicate) {
            Ok((registry, applied)) => {
                self.registry = registry;
                self.state = ContextState::Ready;
                info!(units = applied, "Configured context");
                Ok(applied)
            }
            Err(err) => {
                self.state = previous;
                Err(err)
            }
        }
    }

    /// Run a configuration pass over the units whose name starts with `prefix`
    pub fn configure_prefixed(
        &mut self,
        discovery: &dyn UnitDiscovery,
        prefix: &str,
    ) -> Result<usize> {
        debug!(prefix, "Discovering configuration units");
        self.configure(discovery, &prefix_matcher(prefix))
    }

    fn run_pass(
        &self,
        discovery: &dyn UnitDiscovery,
        predicate: &dyn Fn(&str) -> bool,
    ) -> Result<(ImplementationRegistry, usize)> {
        let candidates = discovery.discover(predicate);
        info!(count = candidates.len(), "Discovered configuration units");

        let mut units = candidates
            .into_iter()
            .map(validate)
            .collect::<Result<Vec<ValidatedUnit>>>()?;
        // stable: equal priorities keep discovery order
        units.sort_by_key(ValidatedUnit::priority);

        let mut staged = Self {
            registry: self.registry.clone(),
            state: ContextState::Configuring,
        };
        for unit in &units {
            debug!(
                unit = unit.name(),
                priority = unit.priority(),
                "Configuring context with unit"
            );
            (unit.configure_fn())(&mut staged).map_err(|source| {
                error!(unit = unit.name(), error = %source, "Error configuring context");
                Error::configure(unit.name(), source)
            })?;
        }

        Ok((staged.registry, units.len()))
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register `I` against `B`; `false` if it was already registered
    pub fn register_impl<B, I>(&mut self) -> bool
    where
        B: ExtensionPoint + ?Sized,
        I: Implementation<B>,
    {
        self.registry.register(ImplType::<B>::of::<I>())
    }

    /// Register several implementations against `B`; `false` if any was
    /// already registered
    pub fn register_impls<B: ExtensionPoint + ?Sized>(&mut self, impls: &[ImplType<B>]) -> bool {
        self.registry.register_all(impls)
    }

    /// Deregister `I` from `B`; `false` if it was not registered
    pub fn deregister_impl<B, I>(&mut self) -> bool
    where
        B: ExtensionPoint + ?Sized,
        I: Implementation<B>,
    {
        self.registry
            .deregister::<B>(std::any::TypeId::of::<I>())
    }

    /// Deregister every implementation of `B`
    pub fn deregister_all<B: ExtensionPoint + ?Sized>(&mut self) -> usize {
        self.registry.deregister_all::<B>()
    }

    /// True if `I` is registered against `B`
    pub fn has_impl<B, I>(&self) -> bool
    where
        B: ExtensionPoint + ?Sized,
        I: Implementation<B>,
    {
        self.registry.has_impl::<B>(std::any::TypeId::of::<I>())
    }

    // ==========================================================================
    // Queries
    // ==========================================================================

    /// Implementations of `B`, filtered and sorted by `query`
    pub fn get_impls<B: ExtensionPoint + ?Sized>(
        &self,
        query: &Query<'_, B>,
    ) -> Result<Vec<ImplType<B>>> {
        self.query().get_impls(query)
    }

    /// Implementations of `B` in default priority order
    pub fn impls<B: ExtensionPoint + ?Sized>(&self) -> Result<Vec<ImplType<B>>> {
        self.get_impls(&Query::new())
    }

    /// Default implementation of `B` under `query`
    pub fn get_default_impl<B: ExtensionPoint + ?Sized>(
        &self,
        query: &Query<'_, B>,
    ) -> Result<ImplType<B>> {
        self.query().get_default_impl(query)
    }

    /// Highest-priority implementation of `B`
    pub fn default_impl<B: ExtensionPoint + ?Sized>(&self) -> Result<ImplType<B>> {
        self.get_default_impl(&Query::new())
    }

    /// Instances of every implementation of `B` under `query`
    pub fn get_instances<B: ExtensionPoint + ?Sized>(
        &self,
        args: &B::Args,
        query: &Query<'_, B>,
    ) -> Result<Vec<Box<B>>> {
        self.query().get_instances(args, query)
    }

    /// Instances of every implementation of `B` in default priority order
    pub fn instances<B: ExtensionPoint + ?Sized>(&self, args: &B::Args) -> Result<Vec<Box<B>>> {
        self.get_instances(args, &Query::new())
    }

    /// New instance of the default implementation of `B` under `query`
    pub fn get_new_default_instance<B: ExtensionPoint + ?Sized>(
        &self,
        args: &B::Args,
        query: &Query<'_, B>,
    ) -> Result<Box<B>> {
        self.query().get_new_default_instance(args, query)
    }

    /// New instance of the highest-priority implementation of `B`
    pub fn new_default_instance<B: ExtensionPoint + ?Sized>(
        &self,
        args: &B::Args,
    ) -> Result<Box<B>> {
        self.get_new_default_instance(args, &Query::new())
    }
}

/// Create a context configured from the link-time unit registry
///
/// Units are selected by the configured name prefix (`injecty_config` by
/// default).
pub fn create_injecty_context(config: &DiscoveryConfig) -> Result<InjectyContext> {
    create_injecty_context_with(&LinkmeDiscovery::new(), config)
}

/// Create a context configured from `discovery`
pub fn create_injecty_context_with(
    discovery: &dyn UnitDiscovery,
    config: &DiscoveryConfig,
) -> Result<InjectyContext> {
    info!(
        prefix = config.unit_prefix.as_str(),
        "Creating new InjectyContext"
    );
    let mut context = InjectyContext::new();
    context.configure_prefixed(discovery, &config.unit_prefix)?;
    Ok(context)
}
