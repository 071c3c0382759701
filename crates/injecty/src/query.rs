//! Query Engine
//!
//! Read-only selection over an [`ImplementationRegistry`]:
//!
//! ```text
//! impls(B) ──► filter ──► stable sort ──► first ──► instantiate
//!   │             │            │             │            │
//! get_impls ──────┴────────────┘             │            │
//! get_default_impl ──────────────────────────┘            │
//! get_instances / get_new_default_instance ───────────────┘
//! ```
//!
//! Without a caller-supplied ordering, implementations are sorted by their
//! effective priority, highest first; equal priorities keep insertion order.

use std::cmp::Ordering;

use injecty_domain::{Error, ExtensionPoint, ImplType, Result};
use tracing::{debug, error, warn};

use crate::registry::ImplementationRegistry;

type FilterFn<'q, B> = Box<dyn Fn(&ImplType<B>) -> bool + 'q>;
type CompareFn<'q, B> = Box<dyn Fn(&ImplType<B>, &ImplType<B>) -> Ordering + 'q>;

/// Options narrowing and ordering a registry lookup.
///
/// # Example
///
/// ```ignore
/// let query = Query::<dyn Shape>::new()
///     .filter(|candidate| candidate.name() == "Square")
///     .sort_by_key(|candidate| candidate.name());
/// let square = context.get_default_impl(&query)?;
/// ```
pub struct Query<'q, B: ExtensionPoint + ?Sized> {
    filter: Option<FilterFn<'q, B>>,
    comparator: Option<CompareFn<'q, B>>,
    reverse: bool,
    permit_unknown: bool,
}

impl<'q, B: ExtensionPoint + ?Sized> Query<'q, B> {
    /// Query with the default descending-priority policy
    pub fn new() -> Self {
        Self {
            filter: None,
            comparator: None,
            reverse: false,
            permit_unknown: false,
        }
    }

    /// Keep only candidates accepted by `predicate`
    pub fn filter(mut self, predicate: impl Fn(&ImplType<B>) -> bool + 'q) -> Self {
        self.filter = Some(Box::new(predicate));
        self
    }

    /// Replace the default ordering with `compare` (applied as a stable sort)
    pub fn sort_by(
        mut self,
        compare: impl Fn(&ImplType<B>, &ImplType<B>) -> Ordering + 'q,
    ) -> Self {
        self.comparator = Some(Box::new(compare));
        self
    }

    /// Replace the default ordering with ascending `key`
    pub fn sort_by_key<K: Ord>(self, key: impl Fn(&ImplType<B>) -> K + 'q) -> Self {
        self.sort_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Invert the chosen ordering; equal candidates keep insertion order
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Treat an unknown base as having no implementations instead of failing
    pub fn permit_unknown(mut self) -> Self {
        self.permit_unknown = true;
        self
    }

    fn accepts(&self, candidate: &ImplType<B>) -> bool {
        self.filter.as_ref().is_none_or(|predicate| predicate(candidate))
    }

    fn compare(&self, a: &ImplType<B>, b: &ImplType<B>) -> Ordering {
        let (a, b) = if self.reverse { (b, a) } else { (a, b) };
        match &self.comparator {
            Some(compare) => compare(a, b),
            None => b.priority().cmp(&a.priority()),
        }
    }
}

impl<B: ExtensionPoint + ?Sized> Default for Query<'_, B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only query operations over a registry
pub struct QueryEngine<'r> {
    registry: &'r ImplementationRegistry,
}

impl<'r> QueryEngine<'r> {
    /// Query engine borrowing `registry`
    pub fn new(registry: &'r ImplementationRegistry) -> Self {
        Self { registry }
    }

    /// Registered implementations of `B`, filtered and sorted by `query`.
    ///
    /// Fails with [`Error::UnknownBaseType`] if `B` was never registered,
    /// unless the query permits unknown bases. A known base whose
    /// implementations were all removed yields an empty list.
    pub fn get_impls<B: ExtensionPoint + ?Sized>(
        &self,
        query: &Query<'_, B>,
    ) -> Result<Vec<ImplType<B>>> {
        let Some(mut impls) = self.registry.impls::<B>() else {
            if query.permit_unknown {
                debug!(base = B::name(), "No implementations found (permitted)");
                return Ok(Vec::new());
            }
            warn!(base = B::name(), "No implementations found");
            return Err(Error::unknown_base_type(B::name()));
        };

        impls.retain(|candidate| query.accepts(candidate));
        // slice::sort_by is stable
        impls.sort_by(|a, b| query.compare(a, b));
        debug!(
            base = B::name(),
            count = impls.len(),
            custom_order = query.comparator.is_some(),
            "Resolved implementations"
        );
        Ok(impls)
    }

    /// First implementation of `B` after filtering and sorting
    pub fn get_default_impl<B: ExtensionPoint + ?Sized>(
        &self,
        query: &Query<'_, B>,
    ) -> Result<ImplType<B>> {
        let selected = self
            .get_impls(query)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::no_implementations_found(B::name()))?;
        debug!(
            base = B::name(),
            implementation = selected.name(),
            "Selected default implementation"
        );
        Ok(selected)
    }

    /// Instantiate every implementation of `B` in query order.
    ///
    /// Construction is sequential; the first constructor failure is returned
    /// unchanged and later candidates are not constructed.
    pub fn get_instances<B: ExtensionPoint + ?Sized>(
        &self,
        args: &B::Args,
        query: &Query<'_, B>,
    ) -> Result<Vec<Box<B>>> {
        let impls = self.get_impls(query)?;
        debug!(
            base = B::name(),
            count = impls.len(),
            "Creating instances"
        );
        impls
            .iter()
            .map(|implementation| instantiate(implementation, args))
            .collect()
    }

    /// Instantiate only the default implementation of `B`
    pub fn get_new_default_instance<B: ExtensionPoint + ?Sized>(
        &self,
        args: &B::Args,
        query: &Query<'_, B>,
    ) -> Result<Box<B>> {
        let implementation = self.get_default_impl(query)?;
        instantiate(&implementation, args)
    }
}

fn instantiate<B: ExtensionPoint + ?Sized>(
    implementation: &ImplType<B>,
    args: &B::Args,
) -> Result<Box<B>> {
    match implementation.instantiate(args) {
        Ok(instance) => {
            debug!(
                base = B::name(),
                implementation = implementation.name(),
                "Created instance"
            );
            Ok(instance)
        }
        Err(source) => {
            error!(
                base = B::name(),
                implementation = implementation.name(),
                error = %source,
                "Failed to create instance"
            );
            Err(Error::Construction(source))
        }
    }
}
