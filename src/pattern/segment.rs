use regex::Regex;
use std::fmt;

/// Name the wildcard captures under, matching what the rest of
/// the system expects to find in the parameter map.
pub const WILDCARD_NAME: &str = "splat";

/// A compiled regular-expression constraint on a parameter segment.
///
/// The source text is anchored on compilation so `[0-9]+` means "the whole
/// component is digits", never a substring match.
#[derive(Debug, Clone)]
pub struct Constraint {
    raw: Box<str>,
    regex: Regex,
}

impl Constraint {
    pub(crate) fn new(raw: &str, regex: Regex) -> Self {
        Self {
            raw: raw.into(),
            regex,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn is_match(&self, component: &str) -> bool {
        self.regex.is_match(component)
    }
}

// Compiled regexes are not comparable; the raw source text is the identity.
impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Constraint {}

/// One typed unit of a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path component exactly (case-sensitive).
    Literal(Box<str>),
    /// Consumes exactly one component, optionally constrained.
    Param {
        name: Box<str>,
        constraint: Option<Constraint>,
    },
    /// Consumes one component when one remains, otherwise absent.
    OptionalParam {
        name: Box<str>,
        constraint: Option<Constraint>,
    },
    /// Consumes the middle of the path, separators included; at most one
    /// per pattern, and only required segments may follow it.
    Wildcard,
}

impl Segment {
    /// The parameter name this segment captures under, if any.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param { name, .. } | Segment::OptionalParam { name, .. } => Some(name),
            Segment::Wildcard => Some(WILDCARD_NAME),
        }
    }

    pub(crate) fn is_required(&self) -> bool {
        matches!(self, Segment::Literal(_) | Segment::Param { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Param { name, constraint } => match constraint {
                Some(c) => write!(f, ":{name}({})", c.raw()),
                None => write!(f, ":{name}"),
            },
            Segment::OptionalParam { name, constraint } => match constraint {
                Some(c) => write!(f, "?:{name}({})", c.raw()),
                None => write!(f, "?:{name}"),
            },
            Segment::Wildcard => f.write_str("*"),
        }
    }
}
