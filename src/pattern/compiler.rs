use regex::Regex;

use crate::pattern::segment::{Constraint, Segment, WILDCARD_NAME};
use crate::pattern::{PatternError, PatternResult};

/// Compiles a pattern string into its ordered segment sequence.
///
/// Pieces are the `/`-separated parts of the pattern; empty pieces are
/// discarded, so `/api/projects/` and `/api/projects` compile identically.
/// A pattern with zero pieces (the root) is legal and matches only the
/// empty path.
///
/// At most one wildcard is allowed, and the segments after it must all be
/// required: the wildcard right-anchors them against the end of the path,
/// which an optional segment would make ambiguous.
pub fn compile(pattern: &str) -> PatternResult<Vec<Segment>> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut names: Vec<Box<str>> = Vec::new();
    let mut saw_wildcard = false;

    for piece in pattern.split('/') {
        if piece.is_empty() {
            continue;
        }

        let segment = if piece == "*" {
            if saw_wildcard {
                return Err(PatternError::MisplacedWildcard {
                    pattern: pattern.to_string(),
                });
            }
            saw_wildcard = true;
            note_param(pattern, &mut names, WILDCARD_NAME)?;
            Segment::Wildcard
        } else if let Some(body) = piece.strip_prefix("?:") {
            if saw_wildcard {
                return Err(PatternError::MisplacedWildcard {
                    pattern: pattern.to_string(),
                });
            }
            let (name, constraint) = parse_param(pattern, piece, body)?;
            note_param(pattern, &mut names, &name)?;
            Segment::OptionalParam { name, constraint }
        } else if let Some(body) = piece.strip_prefix(':') {
            let (name, constraint) = parse_param(pattern, piece, body)?;
            note_param(pattern, &mut names, &name)?;
            Segment::Param { name, constraint }
        } else {
            Segment::Literal(piece.into())
        };

        segments.push(segment);
    }

    Ok(segments)
}

fn note_param(pattern: &str, names: &mut Vec<Box<str>>, name: &str) -> PatternResult<()> {
    if names.iter().any(|seen| &**seen == name) {
        return Err(PatternError::DuplicateParam {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }
    names.push(name.into());
    Ok(())
}

/// The normalized pattern text: the identity under which repeated
/// registrations of one pattern merge. Root renders as `/`.
pub fn canonical(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        out.push_str(&segment.to_string());
    }
    out
}

fn parse_param(
    pattern: &str,
    piece: &str,
    body: &str,
) -> PatternResult<(Box<str>, Option<Constraint>)> {
    let (name, constraint_src) = match body.find('(') {
        Some(open) => {
            let rest = &body[open..];
            if !rest.ends_with(')') || rest.len() < 2 {
                return Err(PatternError::UnterminatedConstraint {
                    pattern: pattern.to_string(),
                    name: body[..open].to_string(),
                });
            }
            (&body[..open], Some(&rest[1..rest.len() - 1]))
        }
        None => (body, None),
    };

    validate_name(pattern, piece, name)?;

    let constraint = match constraint_src {
        Some(raw) => {
            // Anchor so the constraint must cover the whole component.
            let source = format!("^(?:{raw})$");
            match Regex::new(&source) {
                Ok(regex) => Some(Constraint::new(raw, regex)),
                Err(err) => {
                    return Err(PatternError::InvalidConstraint {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                        constraint: raw.to_string(),
                        error: err.to_string(),
                    });
                }
            }
        }
        None => None,
    };

    Ok((name.into(), constraint))
}

fn validate_name(pattern: &str, piece: &str, name: &str) -> PatternResult<()> {
    let bytes = name.as_bytes();
    if bytes.is_empty() {
        return Err(PatternError::MissingParamName {
            pattern: pattern.to_string(),
            segment: piece.to_string(),
        });
    }
    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return Err(PatternError::InvalidParamStart {
            pattern: pattern.to_string(),
            name: name.to_string(),
            found: bytes[0] as char,
        });
    }
    for &c in &bytes[1..] {
        if !(c.is_ascii_alphanumeric() || c == b'_') {
            return Err(PatternError::InvalidParamChar {
                pattern: pattern.to_string(),
                name: name.to_string(),
                invalid: c as char,
            });
        }
    }
    Ok(())
}
