use std::fmt;

use crate::error::PushError;
use crate::pattern::{Match, WildcardPattern};

/// An ordered list of patterns matching a name if any of them does.
///
/// The list owns its patterns, dropping or killing it releases each of them once.
/// Patterns are tested in insertion order and the first match wins.
///
/// # Examples
///
/// ```
/// use wildcard::{WildcardList, WildcardPattern};
///
/// let mut list = WildcardList::new();
/// list.push("Bar*".parse::<WildcardPattern>().unwrap());
/// list.push("Baz*".parse::<WildcardPattern>().unwrap());
///
/// assert!(list.match_any("Bazooka"));
/// assert!(!list.match_any("Foo"));
/// assert_eq!(list.kill(), 2);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct WildcardList<M = WildcardPattern> {
    items: Vec<M>,
}

impl<M> WildcardList<M> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.items.iter()
    }

    /// Appends a pattern to the end of the list.
    pub fn push(&mut self, pattern: M) {
        self.items.push(pattern);
    }

    /// Appends a pattern, reporting allocation failure instead of aborting.
    ///
    /// On failure the pattern is handed back inside the error and the list is unchanged.
    pub fn try_push(&mut self, pattern: M) -> Result<(), PushError<M>> {
        if let Err(err) = self.items.try_reserve(1) {
            return Err(PushError::new(pattern, err));
        }
        self.items.push(pattern);
        Ok(())
    }

    /// Releases every pattern one by one, returning how many were released.
    pub fn kill(self) -> usize {
        let mut released = 0;
        for pattern in self.items {
            drop(pattern);
            released += 1;
        }
        released
    }
}

impl<M: Match> WildcardList<M> {
    /// Tests whether any pattern in the list matches `haystack`.
    ///
    /// Returns `false` for an empty list. Stops at the first matching pattern.
    #[inline]
    pub fn match_any(&self, haystack: &str) -> bool {
        self.items.iter().any(|pattern| pattern.matches(haystack))
    }
}

impl<M: Match> Match for WildcardList<M> {
    #[inline]
    fn matches(&self, haystack: &str) -> bool {
        self.match_any(haystack)
    }
}

impl<M> Default for WildcardList<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> FromIterator<M> for WildcardList<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<M> Extend<M> for WildcardList<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<M> IntoIterator for WildcardList<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a WildcardList<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<M: fmt::Display> fmt::Display for WildcardList<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.items.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}
