pub mod errors;
mod fallback;
mod matcher;
mod method;
mod path;
pub mod pattern;
mod registry;
mod route;
mod table;

pub use errors::{RouterError, RouterResult};
pub use fallback::FallbackResponse;
pub use matcher::{Dispatch, PathParams};
pub use method::{Method, MethodSet};
pub use pattern::{PatternError, Segment, WILDCARD_NAME};
pub use route::Route;
pub use table::RouteTable;

use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

use registry::{MethodKey, Registry};

#[derive(Debug)]
struct RouterInner<H> {
    registry: Registry<H>,
    table: OnceLock<Arc<RouteTable<H>>>,
}

/// Boot-time registrar for an ordered route table.
///
/// Registration happens single-threaded before any request is served;
/// `freeze` builds the immutable `RouteTable` snapshot and every `add*`
/// call afterwards fails with `RouterError::Frozen`. The handler type `H`
/// is opaque to the router; it is handed back by `RouteTable::dispatch`
/// and never invoked here.
#[derive(Debug)]
pub struct Router<H> {
    inner: RwLock<RouterInner<H>>,
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RouterInner {
                registry: Registry::new(),
                table: OnceLock::new(),
            }),
        }
    }

    /// Binds `handler` to (pattern, method). Registering further methods
    /// on the same pattern merges into one route whose position is fixed
    /// by the first registration; re-registering a method replaces its
    /// earlier handler.
    pub fn add(&self, method: Method, pattern: &str, handler: H) -> RouterResult<()> {
        let mut g = self.inner.write();
        if g.table.get().is_some() {
            return Err(RouterError::Frozen {
                pattern: pattern.to_string(),
            });
        }
        g.registry.bind(pattern, MethodKey::Only(method), handler)
    }

    /// Binds `handler` as the route's any-method entry; an explicit method
    /// binding on the same route takes precedence at dispatch.
    pub fn add_any(&self, pattern: &str, handler: H) -> RouterResult<()> {
        let mut g = self.inner.write();
        if g.table.get().is_some() {
            return Err(RouterError::Frozen {
                pattern: pattern.to_string(),
            });
        }
        g.registry.bind(pattern, MethodKey::Any, handler)
    }

    pub fn add_bulk<I>(&self, entries: I) -> RouterResult<()>
    where
        I: IntoIterator<Item = (Method, String, H)>,
    {
        let mut g = self.inner.write();
        if g.table.get().is_some() {
            let pattern = entries
                .into_iter()
                .next()
                .map(|(_, pattern, _)| pattern)
                .unwrap_or_default();
            return Err(RouterError::Frozen { pattern });
        }
        for (method, pattern, handler) in entries {
            g.registry.bind(&pattern, MethodKey::Only(method), handler)?;
        }
        Ok(())
    }

    /// Registers a feature group. The flag is evaluated exactly once, here;
    /// a disabled group is a silent no-op and its routes never exist, so
    /// flipping the flag after freeze cannot revive them.
    pub fn group<F>(&self, enabled: bool, register: F) -> RouterResult<()>
    where
        F: FnOnce(&Self) -> RouterResult<()>,
    {
        if !enabled {
            trace!("feature group disabled; skipping registration");
            return Ok(());
        }
        register(self)
    }

    /// Ends the boot phase: drains the registry into an immutable
    /// `RouteTable` shared by all dispatching tasks. Idempotent; repeated
    /// calls return the same snapshot.
    pub fn freeze(&self) -> Arc<RouteTable<H>> {
        let mut g = self.inner.write();
        if let Some(existing) = g.table.get() {
            return existing.clone();
        }
        let table = Arc::new(RouteTable::new(g.registry.take_routes()));
        debug!(routes = table.len() as u64, "route table frozen");
        let _ = g.table.set(table.clone());
        table
    }

    /// The frozen snapshot, or `RouterError::NotFrozen` while the boot
    /// phase is still open.
    pub fn table(&self) -> RouterResult<Arc<RouteTable<H>>> {
        let g = self.inner.read();
        g.table.get().cloned().ok_or(RouterError::NotFrozen)
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}
