use bitflags::bitflags;
use std::fmt;

/// HTTP methods a route can answer. `Router::add_any` covers the
/// "every method" binding without a dedicated variant here.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Method {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

pub(crate) const METHOD_COUNT: usize = 7;

impl Method {
    pub(crate) const ALL: [Method; METHOD_COUNT] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
        Method::Options,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// Case-insensitive lookup, so both `get` and `GET` resolve.
    pub fn parse(value: &str) -> Option<Method> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value))
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of HTTP methods, reported by `Dispatch::MethodNotAllowed`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MethodSet: u8 {
        const GET = 1 << 0;
        const POST = 1 << 1;
        const PUT = 1 << 2;
        const DELETE = 1 << 3;
        const PATCH = 1 << 4;
        const HEAD = 1 << 5;
        const OPTIONS = 1 << 6;
    }
}

impl From<Method> for MethodSet {
    fn from(method: Method) -> Self {
        MethodSet::from_bits_truncate(1u8 << method.index())
    }
}

impl MethodSet {
    pub fn contains_method(self, method: Method) -> bool {
        self.contains(MethodSet::from(method))
    }

    /// Methods in the set, in the fixed declaration order of `Method`.
    pub fn methods(self) -> impl Iterator<Item = Method> {
        Method::ALL
            .into_iter()
            .filter(move |m| self.contains_method(*m))
    }
}

/// Renders as an `Allow` header value, e.g. `GET, PUT, DELETE`.
impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for method in self.methods() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(method.as_str())?;
            first = false;
        }
        Ok(())
    }
}
