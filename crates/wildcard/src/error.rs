use std::collections::TryReserveError;
use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// The needle range does not describe text inside the pattern buffer.
///
/// The rejected buffer is kept so that the caller still owns it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("needle range {range:?} is not within pattern {pattern:?}")]
pub struct CreateError {
    range: Range<usize>,
    pattern: Box<str>,
}

impl CreateError {
    pub(crate) fn new(range: Range<usize>, pattern: Box<str>) -> Self {
        Self { range, pattern }
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Gives the rejected buffer back to the caller.
    pub fn into_pattern(self) -> Box<str> {
        self.pattern
    }
}

// ---

/// A wildcard string could not be compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unsupported wildcard at position {position} in {pattern:?}, only a leading or trailing '*' is allowed")]
    UnsupportedWildcard { pattern: String, position: usize },
    #[error(transparent)]
    InvalidNeedle(#[from] CreateError),
}

// ---

/// Storage for one more pattern could not be reserved.
///
/// The pattern that was being pushed is handed back.
#[derive(Error)]
#[error("failed to reserve storage for a pattern: {source}")]
pub struct PushError<M> {
    pattern: M,
    #[source]
    source: TryReserveError,
}

impl<M> PushError<M> {
    pub(crate) fn new(pattern: M, source: TryReserveError) -> Self {
        Self { pattern, source }
    }

    pub fn into_pattern(self) -> M {
        self.pattern
    }
}

// Does not require `M: Debug`, so any pattern type can be pushed.
impl<M> fmt::Debug for PushError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError").field("source", &self.source).finish_non_exhaustive()
    }
}
