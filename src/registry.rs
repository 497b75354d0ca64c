use hashbrown::HashMap as FastHashMap;
use tracing::trace;

use crate::errors::RouterResult;
use crate::method::Method;
use crate::pattern::{canonical, compile};
use crate::route::Route;

/// Which handler slot a registration fills.
#[derive(Debug, Clone, Copy)]
pub(crate) enum MethodKey {
    Only(Method),
    /// The `*` method key: answers every method without a closer binding.
    Any,
}

/// Boot-phase route store. Mutated only from the single-threaded boot
/// sequence, then drained into the frozen `RouteTable`.
#[derive(Debug)]
pub(crate) struct Registry<H> {
    routes: Vec<Route<H>>,
    /// Canonical pattern text -> index into `routes`, so repeated
    /// registrations of one pattern merge instead of appending.
    index: FastHashMap<Box<str>, usize>,
}

impl<H> Registry<H> {
    pub(crate) fn new() -> Self {
        Self {
            routes: Vec::new(),
            index: FastHashMap::new(),
        }
    }

    /// Compiles the pattern and binds the handler, merging into an
    /// existing route when the compiled pattern is already known. The
    /// route's position stays where its first registration put it; a
    /// repeated (pattern, method) pair silently replaces the handler.
    pub(crate) fn bind(&mut self, pattern: &str, key: MethodKey, handler: H) -> RouterResult<()> {
        let segments = compile(pattern)?;
        let canon = canonical(&segments);

        let idx = match self.index.get(canon.as_str()) {
            Some(&existing) => {
                trace!(pattern = canon.as_str(), "merging into existing route");
                existing
            }
            None => {
                let order = self.routes.len();
                self.routes
                    .push(Route::new(canon.as_str().into(), segments, order));
                self.index.insert(canon.into_boxed_str(), order);
                order
            }
        };

        let route = &mut self.routes[idx];
        let replaced = match key {
            MethodKey::Only(method) => route.methods.bind(method, handler),
            MethodKey::Any => route.methods.bind_any(handler),
        };
        if replaced {
            trace!(
                pattern = route.pattern(),
                ?key,
                "rebinding replaced an earlier handler"
            );
        }
        Ok(())
    }

    pub(crate) fn take_routes(&mut self) -> Vec<Route<H>> {
        self.index.clear();
        std::mem::take(&mut self.routes)
    }
}
