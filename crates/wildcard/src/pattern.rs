use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use memchr::memmem;

use crate::compile::Options;
use crate::error::{CreateError, ParseError};
use crate::mode::{Case, MatchMode};

/// Something that can decide whether a candidate name matches.
pub trait Match {
    fn matches(&self, haystack: &str) -> bool;
}

impl<M: Match + ?Sized> Match for &M {
    #[inline]
    fn matches(&self, haystack: &str) -> bool {
        (**self).matches(haystack)
    }
}

impl<M: Match + ?Sized> Match for Box<M> {
    #[inline]
    fn matches(&self, haystack: &str) -> bool {
        (**self).matches(haystack)
    }
}

// ---

/// A compiled wildcard pattern.
///
/// The pattern owns a single buffer, usually the original wildcard string, and its needle is a
/// range inside that buffer. The buffer is released exactly once, when the pattern is dropped
/// or consumed by [`WildcardPattern::kill`]. The type is intentionally not `Clone`.
///
/// # Examples
///
/// ```
/// use wildcard::{MatchMode, WildcardPattern};
///
/// let pattern = WildcardPattern::new(MatchMode::Suffix, 1..4, "*Foo").unwrap();
/// assert_eq!(pattern.needle(), "Foo");
/// assert!(pattern.matches("java/lang/Foo"));
/// assert!(!pattern.matches("Foobar"));
/// pattern.kill();
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct WildcardPattern {
    mode: MatchMode,
    case: Case,
    needle: Range<usize>,
    pattern: Box<str>,
}

impl WildcardPattern {
    /// Creates a pattern taking ownership of `pattern`, with the needle at `needle` inside it.
    ///
    /// The needle range must lie within the buffer on UTF-8 character boundaries, an empty
    /// range is always accepted. Otherwise the buffer is handed back inside the error.
    pub fn new(mode: MatchMode, needle: Range<usize>, pattern: impl Into<Box<str>>) -> Result<Self, CreateError> {
        let pattern = pattern.into();
        let valid = needle.start <= needle.end
            && (needle.is_empty()
                || (needle.end <= pattern.len()
                    && pattern.is_char_boundary(needle.start)
                    && pattern.is_char_boundary(needle.end)));

        if !valid {
            return Err(CreateError::new(needle, pattern));
        }

        let needle = if needle.is_empty() { 0..0 } else { needle };

        Ok(Self {
            mode,
            case: Case::Sensitive,
            needle,
            pattern,
        })
    }

    /// Returns the same pattern with the given case sensitivity.
    pub fn with_case(self, case: Case) -> Self {
        Self { case, ..self }
    }

    #[inline]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    #[inline]
    pub fn case(&self) -> Case {
        self.case
    }

    /// The literal text compared against candidate names.
    #[inline]
    pub fn needle(&self) -> &str {
        &self.pattern[self.needle.clone()]
    }

    /// The owned buffer the needle points into.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Tests whether `haystack` matches the pattern.
    ///
    /// This never allocates and is total over all inputs, including empty ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{MatchMode, WildcardPattern};
    ///
    /// let pattern = WildcardPattern::new(MatchMode::Contains, 0..0, "").unwrap();
    /// assert!(pattern.matches("anything"));
    /// assert!(pattern.matches(""));
    /// ```
    #[inline]
    pub fn matches(&self, haystack: &str) -> bool {
        let needle = self.needle().as_bytes();
        let haystack = haystack.as_bytes();
        let n = needle.len();

        match self.mode {
            MatchMode::Any => true,
            MatchMode::Exact => self.case.compare(haystack, needle),
            MatchMode::Prefix => haystack.len() >= n && self.case.compare(&haystack[..n], needle),
            MatchMode::Suffix => haystack.len() >= n && self.case.compare(&haystack[haystack.len() - n..], needle),
            MatchMode::Contains => self.contains(haystack, needle),
        }
    }

    /// Releases the pattern and its buffer.
    ///
    /// Consuming `self` guarantees the pattern cannot be used or released again.
    pub fn kill(self) {
        drop(self)
    }

    #[inline]
    fn contains(&self, haystack: &[u8], needle: &[u8]) -> bool {
        if needle.is_empty() {
            return true;
        }

        match self.case {
            Case::Sensitive => memmem::find(haystack, needle).is_some(),
            Case::Insensitive => haystack.windows(needle.len()).any(|w| w.eq_ignore_ascii_case(needle)),
        }
    }
}

impl Match for WildcardPattern {
    #[inline]
    fn matches(&self, haystack: &str) -> bool {
        WildcardPattern::matches(self, haystack)
    }
}

impl FromStr for WildcardPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Options::default().compile(s)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode.leading_wildcard() {
            f.write_str("*")?;
        }
        if self.mode != MatchMode::Any {
            f.write_str(self.needle())?;
        }
        if self.mode.trailing_wildcard() {
            f.write_str("*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
