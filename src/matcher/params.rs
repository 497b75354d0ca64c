use smallvec::SmallVec;

use crate::pattern::WILDCARD_NAME;

type CapturedParam = (Box<str>, String);

/// Parameters captured for one matched request.
///
/// Built fresh per dispatch and owned by the caller; most routes capture
/// one or two values so the backing storage stays inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    captures: SmallVec<[CapturedParam; 4]>,
}

impl PathParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        self.captures.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.captures
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The wildcard capture, when the route had one.
    pub fn wildcard(&self) -> Option<&str> {
        self.get(WILDCARD_NAME)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.captures.iter().map(|(n, v)| (&**n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}
