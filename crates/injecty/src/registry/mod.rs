//! Implementation Registry
//!
//! The mutable store behind an [`InjectyContext`](crate::InjectyContext):
//! a mapping from each base type to the ordered set of implementation types
//! registered against it.
//!
//! ## Storage
//!
//! ```text
//! IndexMap<TypeId(base), Box<dyn ErasedEntry>>
//!                              │ downcast
//!                              ▼
//!                    BaseEntry<B> { IndexMap<TypeId(impl), ImplType<B>> }
//! ```
//!
//! Both maps keep first-insertion order, so iteration is deterministic
//! before any sort is applied. Removing an implementation keeps the base's
//! entry, which is how an empty base stays distinguishable from an unknown
//! one.

mod entry;

use std::any::TypeId;

use indexmap::IndexMap;
use injecty_domain::{ExtensionPoint, ImplType};
use tracing::{debug, info};

use entry::{BaseEntry, ErasedEntry};

/// Mapping from base type to its ordered implementation set
#[derive(Default)]
pub struct ImplementationRegistry {
    entries: IndexMap<TypeId, Box<dyn ErasedEntry>>,
}

impl ImplementationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `implementation` against `B`, creating the entry if absent.
    ///
    /// Returns `true` if the implementation was newly registered, `false` if
    /// it was already present (the call is then a no-op).
    pub fn register<B: ExtensionPoint + ?Sized>(&mut self, implementation: ImplType<B>) -> bool {
        let entry = self.entry_mut::<B>();
        if entry.insert(implementation) {
            info!(
                base = B::name(),
                implementation = implementation.name(),
                "Registered implementation"
            );
            true
        } else {
            debug!(
                base = B::name(),
                implementation = implementation.name(),
                "Implementation already registered"
            );
            false
        }
    }

    /// Register several implementations in order.
    ///
    /// Returns `true` only if every implementation was newly registered.
    pub fn register_all<B: ExtensionPoint + ?Sized>(&mut self, impls: &[ImplType<B>]) -> bool {
        debug!(
            base = B::name(),
            count = impls.len(),
            "Registering implementations"
        );
        // every element is registered even after one reports false
        impls
            .iter()
            .fold(true, |all_new, implementation| {
                self.register(*implementation) && all_new
            })
    }

    /// Remove the implementation with `impl_id` from `B`.
    ///
    /// Returns `true` if it was removed; unknown bases and unregistered
    /// implementations are a no-op.
    pub fn deregister<B: ExtensionPoint + ?Sized>(&mut self, impl_id: TypeId) -> bool {
        let Some(entry) = self.entry_of_mut::<B>() else {
            debug!(base = B::name(), "No implementations registered for base");
            return false;
        };
        match entry.remove(impl_id) {
            Some(removed) => {
                info!(
                    base = B::name(),
                    implementation = removed.name(),
                    "Deregistered implementation"
                );
                true
            }
            None => {
                debug!(base = B::name(), "Implementation not registered for base");
                false
            }
        }
    }

    /// Remove every implementation of `B`, returning how many were removed.
    pub fn deregister_all<B: ExtensionPoint + ?Sized>(&mut self) -> usize {
        let removed = self.entry_of_mut::<B>().map_or(0, BaseEntry::clear);
        if removed > 0 {
            info!(base = B::name(), removed, "Deregistered all implementations");
        }
        removed
    }

    /// True if `impl_id` is registered against `B`
    pub fn has_impl<B: ExtensionPoint + ?Sized>(&self, impl_id: TypeId) -> bool {
        self.entry_of::<B>()
            .is_some_and(|entry| entry.contains(impl_id))
    }

    /// True if `B` has an entry, even an empty one
    pub fn is_known<B: ExtensionPoint + ?Sized>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<B>())
    }

    /// Implementations of `B` in insertion order, or `None` for an unknown base
    pub fn impls<B: ExtensionPoint + ?Sized>(&self) -> Option<Vec<ImplType<B>>> {
        self.entry_of::<B>().map(BaseEntry::to_vec)
    }

    /// Names of the known base types, in first registration order
    pub fn base_types(&self) -> Vec<&'static str> {
        self.entries.values().map(|entry| entry.base_name()).collect()
    }

    /// Implementation names per base type, for diagnostics
    pub fn summary(&self) -> Vec<(&'static str, Vec<&'static str>)> {
        self.entries
            .values()
            .map(|entry| (entry.base_name(), entry.impl_names()))
            .collect()
    }

    /// Total number of registered (base, implementation) pairs
    pub fn len(&self) -> usize {
        self.entries.values().map(|entry| entry.len()).sum()
    }

    /// True when no implementation is registered at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry_of<B: ExtensionPoint + ?Sized>(&self) -> Option<&BaseEntry<B>> {
        self.entries
            .get(&TypeId::of::<B>())
            .and_then(|entry| entry.downcast_ref::<BaseEntry<B>>())
    }

    fn entry_of_mut<B: ExtensionPoint + ?Sized>(&mut self) -> Option<&mut BaseEntry<B>> {
        self.entries
            .get_mut(&TypeId::of::<B>())
            .and_then(|entry| entry.downcast_mut::<BaseEntry<B>>())
    }

    fn entry_mut<B: ExtensionPoint + ?Sized>(&mut self) -> &mut BaseEntry<B> {
        let slot = self.entries.entry(TypeId::of::<B>()).or_insert_with(|| {
            debug!(base = B::name(), "Created implementation set for base");
            Box::new(BaseEntry::<B>::new())
        });
        match slot.downcast_mut::<BaseEntry<B>>() {
            Some(entry) => entry,
            // keyed by TypeId::of::<B>, so the stored entry is always BaseEntry<B>
            None => unreachable!("registry entry type mismatch for {}", B::name()),
        }
    }
}

impl Clone for ImplementationRegistry {
    fn clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(base, entry)| (*base, entry.clone_entry()))
                .collect(),
        }
    }
}

impl std::fmt::Debug for ImplementationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.summary()).finish()
    }
}
