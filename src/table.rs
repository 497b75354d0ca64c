use crate::matcher::{self, Dispatch};
use crate::method::Method;
use crate::route::Route;

/// The frozen, ordered route collection.
///
/// Iteration order equals registration order and decides match priority.
/// Once built the table is never mutated; it is shared behind an `Arc`
/// across every dispatching task.
#[derive(Debug)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> RouteTable<H> {
    pub(crate) fn new(routes: Vec<Route<H>>) -> Self {
        Self { routes }
    }

    /// Resolves one request. Pure computation over immutable data: no
    /// locking, no blocking, no shared mutable state.
    pub fn dispatch(&self, method: Method, path: &str) -> Dispatch<'_, H> {
        matcher::resolve(self, method, path)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<H>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
