//! Type-erased registry entries
//!
//! Each base type owns one [`BaseEntry`]; the registry stores them behind
//! [`ErasedEntry`] and recovers the typed form with `downcast-rs`.

use std::any::TypeId;

use downcast_rs::{DowncastSync, impl_downcast};
use indexmap::IndexMap;
use injecty_domain::{ExtensionPoint, ImplType};

/// Object-safe view of a [`BaseEntry`] for any base type.
pub(crate) trait ErasedEntry: DowncastSync {
    /// Display name of the base type
    fn base_name(&self) -> &'static str;

    /// Names of the registered implementations, in insertion order
    fn impl_names(&self) -> Vec<&'static str>;

    /// Number of registered implementations
    fn len(&self) -> usize;

    /// Deep copy behind a fresh box
    fn clone_entry(&self) -> Box<dyn ErasedEntry>;
}

impl_downcast!(sync ErasedEntry);

/// Ordered set of implementations registered against `B`.
pub(crate) struct BaseEntry<B: ExtensionPoint + ?Sized> {
    impls: IndexMap<TypeId, ImplType<B>>,
}

impl<B: ExtensionPoint + ?Sized> BaseEntry<B> {
    pub(crate) fn new() -> Self {
        Self {
            impls: IndexMap::new(),
        }
    }

    /// Insert at the end unless already present; true when newly added
    pub(crate) fn insert(&mut self, implementation: ImplType<B>) -> bool {
        if self.impls.contains_key(&implementation.type_id()) {
            return false;
        }
        self.impls.insert(implementation.type_id(), implementation);
        true
    }

    /// Order-preserving removal
    pub(crate) fn remove(&mut self, impl_id: TypeId) -> Option<ImplType<B>> {
        self.impls.shift_remove(&impl_id)
    }

    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.impls.len();
        self.impls.clear();
        removed
    }

    pub(crate) fn contains(&self, impl_id: TypeId) -> bool {
        self.impls.contains_key(&impl_id)
    }

    pub(crate) fn to_vec(&self) -> Vec<ImplType<B>> {
        self.impls.values().copied().collect()
    }
}

impl<B: ExtensionPoint + ?Sized> ErasedEntry for BaseEntry<B> {
    fn base_name(&self) -> &'static str {
        B::name()
    }

    fn impl_names(&self) -> Vec<&'static str> {
        self.impls.values().map(ImplType::name).collect()
    }

    fn len(&self) -> usize {
        self.impls.len()
    }

    fn clone_entry(&self) -> Box<dyn ErasedEntry> {
        Box::new(Self {
            impls: self.impls.clone(),
        })
    }
}
