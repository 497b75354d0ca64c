mod compiler;
mod error;
mod segment;

pub use compiler::{canonical, compile};
pub use error::{PatternError, PatternResult};
pub use segment::{Constraint, Segment, WILDCARD_NAME};
