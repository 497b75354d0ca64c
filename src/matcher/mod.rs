mod params;

pub use params::PathParams;

use tracing::trace;

use crate::method::{Method, MethodSet};
use crate::path::components;
use crate::pattern::{Segment, WILDCARD_NAME};
use crate::table::RouteTable;

/// Outcome of resolving one (method, path) pair against the table.
///
/// All three variants are ordinary values; a miss is not an error.
#[derive(Debug)]
pub enum Dispatch<'a, H> {
    /// A route matched structurally and answers this method.
    Match { handler: &'a H, params: PathParams },
    /// No route matched the path shape.
    NotFound,
    /// A route matched the path but has no binding for this method.
    MethodNotAllowed { allowed: MethodSet },
}

/// Walks the table in registration order and resolves against the first
/// structural match.
///
/// Path resolution short-circuits there: when the candidate lacks the
/// requested method the scan does not continue looking for another route
/// that happens to carry it. Registration order is the specificity rule;
/// callers register literal routes ahead of the parameterized ones that
/// would shadow them.
#[tracing::instrument(level = "trace", skip(table, path), fields(path = %path, routes = table.len() as u64))]
pub(crate) fn resolve<'a, H>(
    table: &'a RouteTable<H>,
    method: Method,
    path: &str,
) -> Dispatch<'a, H> {
    let comps = components(path);

    for route in table.routes() {
        if !route.fits(comps.len()) {
            continue;
        }
        let Some(params) = match_route(route.segments(), &comps) else {
            continue;
        };

        return match route.methods.lookup(method) {
            Some(handler) => {
                trace!(pattern = route.pattern(), "route matched");
                Dispatch::Match { handler, params }
            }
            None => {
                let allowed = route.methods.allowed();
                trace!(pattern = route.pattern(), %allowed, "method not allowed");
                Dispatch::MethodNotAllowed { allowed }
            }
        };
    }

    trace!("no route matched");
    Dispatch::NotFound
}

/// Structural match of one route's segments against the path components.
///
/// An optional parameter consumes a component whenever one remains; when
/// the components are exhausted it is absent, and any later segment that
/// still requires a component fails the route. A failed constraint fails
/// the whole route, never just the segment. An interior empty component
/// (from a doubled slash) matches nothing.
fn match_route(segments: &[Segment], comps: &[&str]) -> Option<PathParams> {
    let mut params = PathParams::new();
    let mut i = 0usize;

    for (si, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                if comps.get(i).copied() != Some(&**text) {
                    return None;
                }
                i += 1;
            }
            Segment::Param { name, constraint } => {
                let value = *comps.get(i)?;
                if value.is_empty() {
                    return None;
                }
                if let Some(c) = constraint
                    && !c.is_match(value)
                {
                    return None;
                }
                params.push(name, value.to_string());
                i += 1;
            }
            Segment::OptionalParam { name, constraint } => {
                if i < comps.len() {
                    let value = comps[i];
                    if value.is_empty() {
                        return None;
                    }
                    if let Some(c) = constraint
                        && !c.is_match(value)
                    {
                        return None;
                    }
                    params.push(name, value.to_string());
                    i += 1;
                }
            }
            Segment::Wildcard => {
                // Segments after the wildcard are all required, so they
                // right-anchor against the end of the path and the wildcard
                // captures whatever is left of the middle, possibly nothing.
                let tail = segments.len() - si - 1;
                let end = comps.len().checked_sub(tail)?;
                if end < i {
                    return None;
                }
                params.push(WILDCARD_NAME, comps[i..end].join("/"));
                i = end;
            }
        }
    }

    (i == comps.len()).then_some(params)
}
