use crate::method::{METHOD_COUNT, Method, MethodSet};
use crate::pattern::Segment;

/// Per-route handler bindings: one slot per HTTP method plus the
/// any-method slot filled by `Router::add_any`.
#[derive(Debug)]
pub(crate) struct MethodTable<H> {
    entries: [Option<H>; METHOD_COUNT],
    any: Option<H>,
}

impl<H> MethodTable<H> {
    pub(crate) fn new() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
            any: None,
        }
    }

    /// Returns true when an earlier binding for this method was replaced.
    pub(crate) fn bind(&mut self, method: Method, handler: H) -> bool {
        self.entries[method.index()].replace(handler).is_some()
    }

    pub(crate) fn bind_any(&mut self, handler: H) -> bool {
        self.any.replace(handler).is_some()
    }

    /// The any-method binding answers every method without a slot of its own.
    pub(crate) fn lookup(&self, method: Method) -> Option<&H> {
        self.entries[method.index()].as_ref().or(self.any.as_ref())
    }

    pub(crate) fn allowed(&self) -> MethodSet {
        let mut set = MethodSet::empty();
        for method in Method::ALL {
            if self.entries[method.index()].is_some() {
                set |= MethodSet::from(method);
            }
        }
        set
    }
}

/// A compiled pattern bound to its handlers, positioned by first registration.
#[derive(Debug)]
pub struct Route<H> {
    pattern: Box<str>,
    segments: Vec<Segment>,
    pub(crate) methods: MethodTable<H>,
    order: usize,
    required: usize,
    optional: usize,
    wildcard: bool,
}

impl<H> Route<H> {
    pub(crate) fn new(pattern: Box<str>, segments: Vec<Segment>, order: usize) -> Self {
        let required = segments.iter().filter(|s| s.is_required()).count();
        let optional = segments
            .iter()
            .filter(|s| matches!(s, Segment::OptionalParam { .. }))
            .count();
        let wildcard = segments.iter().any(|s| matches!(s, Segment::Wildcard));
        Self {
            pattern,
            segments,
            methods: MethodTable::new(),
            order,
            required,
            optional,
            wildcard,
        }
    }

    /// The canonical pattern text this route was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Position in registration order; fixed at first registration even
    /// when later calls merge more methods in.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Explicitly bound methods; empty for a pure any-method route.
    pub fn allowed_methods(&self) -> MethodSet {
        self.methods.allowed()
    }

    /// Cheap shape check before segment-by-segment matching: a component
    /// count the segments cannot align with skips the route outright.
    pub(crate) fn fits(&self, count: usize) -> bool {
        if count < self.required {
            return false;
        }
        self.wildcard || count <= self.required + self.optional
    }
}
