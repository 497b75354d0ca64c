use thiserror::Error;

use crate::pattern::PatternError;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("route table is frozen; cannot register route '{pattern}'")]
    Frozen { pattern: String },
    #[error("route table is not frozen; dispatch snapshot is unavailable")]
    NotFrozen,
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RouterResult<T> = Result<T, RouterError>;
