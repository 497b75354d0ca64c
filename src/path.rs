use memchr::memchr_iter;
use smallvec::SmallVec;

pub(crate) type Components<'a> = SmallVec<[&'a str; 8]>;

/// Splits a request path into components.
///
/// Empty components from leading and trailing slashes are discarded, so
/// `/` and the empty string both yield zero components, which is what the
/// root pattern matches. An interior empty component (a doubled slash) is
/// kept; no segment matches it.
pub(crate) fn components(path: &str) -> Components<'_> {
    let mut out = Components::new();
    let mut start = 0usize;
    for pos in memchr_iter(b'/', path.as_bytes()) {
        out.push(&path[start..pos]);
        start = pos + 1;
    }
    out.push(&path[start..]);

    while matches!(out.last(), Some(&"")) {
        out.pop();
    }
    let leading = out.iter().take_while(|c| c.is_empty()).count();
    if leading > 0 {
        out.drain(..leading);
    }
    out
}
