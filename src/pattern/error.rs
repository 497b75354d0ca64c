use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error(
        "constraint '{constraint}' for parameter '{name}' in pattern '{pattern}' is not a valid regular expression: {error}"
    )]
    InvalidConstraint {
        pattern: String,
        name: String,
        constraint: String,
        error: String,
    },
    #[error(
        "misplaced wildcard in pattern '{pattern}': at most one wildcard is allowed and only required segments may follow it"
    )]
    MisplacedWildcard { pattern: String },
    #[error("parameter '{name}' appears more than once in pattern '{pattern}'")]
    DuplicateParam { pattern: String, name: String },
    #[error("parameter segment '{segment}' in pattern '{pattern}' is missing a name")]
    MissingParamName { pattern: String, segment: String },
    #[error(
        "parameter name '{name}' in pattern '{pattern}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    InvalidParamStart {
        pattern: String,
        name: String,
        found: char,
    },
    #[error("parameter name '{name}' in pattern '{pattern}' contains invalid character '{invalid}'")]
    InvalidParamChar {
        pattern: String,
        name: String,
        invalid: char,
    },
    #[error("constraint for parameter '{name}' in pattern '{pattern}' is missing its closing parenthesis")]
    UnterminatedConstraint { pattern: String, name: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
