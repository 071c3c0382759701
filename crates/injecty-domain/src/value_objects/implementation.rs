//! Implementation type descriptors

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::DEFAULT_IMPL_PRIORITY;
use crate::error::BoxError;
use crate::ports::{ExtensionPoint, Implementation};

/// Runtime descriptor of an implementation type registered against `B`.
///
/// Descriptors are cheap to copy and compare by the implementation's
/// `TypeId`, so two descriptors of the same type are always equal.
pub struct ImplType<B: ExtensionPoint + ?Sized> {
    type_id: TypeId,
    name: &'static str,
    priority: Option<i32>,
    create: fn(&B::Args) -> Result<Box<B>, BoxError>,
}

impl<B: ExtensionPoint + ?Sized> ImplType<B> {
    /// Descriptor for the implementation `I`
    pub fn of<I: Implementation<B>>() -> Self {
        Self {
            type_id: TypeId::of::<I>(),
            name: I::name(),
            priority: I::PRIORITY,
            create: I::create,
        }
    }

    /// `TypeId` of the implementation type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Display name of the implementation type
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Priority declared by the implementation itself
    pub fn declared_priority(&self) -> Option<i32> {
        self.priority
    }

    /// Effective priority: the implementation's own, then the base default, then 0
    pub fn priority(&self) -> i32 {
        self.priority
            .or(B::DEFAULT_PRIORITY)
            .unwrap_or(DEFAULT_IMPL_PRIORITY)
    }

    /// True if this descriptor stands for the type `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Construct a new instance
    pub fn instantiate(&self, args: &B::Args) -> Result<Box<B>, BoxError> {
        (self.create)(args)
    }
}

impl<B: ExtensionPoint + ?Sized> Clone for ImplType<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ExtensionPoint + ?Sized> Copy for ImplType<B> {}

impl<B: ExtensionPoint + ?Sized> PartialEq for ImplType<B> {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl<B: ExtensionPoint + ?Sized> Eq for ImplType<B> {}

impl<B: ExtensionPoint + ?Sized> Hash for ImplType<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl<B: ExtensionPoint + ?Sized> fmt::Debug for ImplType<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplType")
            .field("base", &B::name())
            .field("name", &self.name)
            .field("priority", &self.priority())
            .finish()
    }
}

impl<B: ExtensionPoint + ?Sized> fmt::Display for ImplType<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
