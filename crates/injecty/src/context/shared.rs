//! Snapshot-swapped context for concurrent readers
//!
//! Readers take an `Arc` snapshot and query it without locking. Writers are
//! serialized; each write clones the current snapshot, applies the change
//! and publishes the result atomically. A failed write publishes nothing.

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use injecty_domain::Result;
use tracing::debug;

use super::InjectyContext;
use crate::unit::UnitDiscovery;

/// Context shared between threads with atomic snapshot publication
pub struct SharedContext {
    current: ArcSwap<InjectyContext>,
    writer: Mutex<()>,
}

impl SharedContext {
    /// Share `context`
    pub fn new(context: InjectyContext) -> Self {
        Self {
            current: ArcSwap::from_pointee(context),
            writer: Mutex::new(()),
        }
    }

    /// Current snapshot
    pub fn load(&self) -> Arc<InjectyContext> {
        self.current.load_full()
    }

    /// Apply `change` to a copy of the current snapshot and publish it
    pub fn update<T>(&self, change: impl FnOnce(&mut InjectyContext) -> T) -> T {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = InjectyContext::clone(&self.current.load());
        let result = change(&mut next);
        self.current.store(Arc::new(next));
        debug!("Published updated context snapshot");
        result
    }

    /// Run a configuration pass on a copy and publish it if the pass succeeds
    pub fn reconfigure(
        &self,
        discovery: &dyn UnitDiscovery,
        predicate: &dyn Fn(&str) -> bool,
    ) -> Result<usize> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = InjectyContext::clone(&self.current.load());
        let applied = next.configure(discovery, predicate)?;
        self.current.store(Arc::new(next));
        debug!(units = applied, "Published reconfigured context snapshot");
        Ok(applied)
    }
}

impl From<InjectyContext> for SharedContext {
    fn from(context: InjectyContext) -> Self {
        Self::new(context)
    }
}

impl std::fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedContext")
            .field("current", &*self.current.load_full())
            .finish_non_exhaustive()
    }
}
