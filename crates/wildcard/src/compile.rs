use memchr::memchr;

use crate::error::ParseError;
use crate::list::WildcardList;
use crate::mode::{Case, MatchMode};
use crate::pattern::WildcardPattern;

/// Compiles a wildcard string with the given case sensitivity.
///
/// See [`Options::compile`].
pub fn compile(raw: &str, case: Case) -> Result<WildcardPattern, ParseError> {
    Options::new().case(case).compile(raw)
}

/// Compiles a list of wildcard strings joined by `separator`.
///
/// See [`Options::compile_list`].
pub fn compile_list(expr: &str, separator: char, case: Case) -> Result<WildcardList, ParseError> {
    Options::new().case(case).separator(separator).compile_list(expr)
}

// ---

/// Settings shared by all patterns compiled together.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Options {
    pub case: Case,
    pub separator: char,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case(self, case: Case) -> Self {
        Self { case, ..self }
    }

    pub fn separator(self, separator: char) -> Self {
        Self { separator, ..self }
    }

    /// Compiles a single wildcard string.
    ///
    /// Surrounding whitespace is ignored. A string consisting only of `*` matches anything,
    /// otherwise one leading and one trailing `*` select the match mode and the text between
    /// them becomes the needle. Any other `*` is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{MatchMode, Options};
    ///
    /// let pattern = Options::new().compile("*Foo*").unwrap();
    /// assert_eq!(pattern.mode(), MatchMode::Contains);
    /// assert_eq!(pattern.needle(), "Foo");
    ///
    /// assert!(Options::new().compile("Fo*o").is_err());
    /// ```
    pub fn compile(&self, raw: &str) -> Result<WildcardPattern, ParseError> {
        let raw = raw.trim();

        if !raw.is_empty() && raw.bytes().all(|b| b == b'*') {
            return Ok(WildcardPattern::new(MatchMode::Any, 0..0, raw)?.with_case(self.case));
        }

        let leading = raw.starts_with('*');
        let trailing = raw.ends_with('*');
        let start = usize::from(leading);
        let end = raw.len() - usize::from(trailing);

        if let Some(i) = memchr(b'*', &raw.as_bytes()[start..end]) {
            return Err(ParseError::UnsupportedWildcard {
                pattern: raw.to_owned(),
                position: start + i,
            });
        }

        let mode = MatchMode::from_wildcards(leading, trailing);

        Ok(WildcardPattern::new(mode, start..end, raw)?.with_case(self.case))
    }

    /// Compiles every non-empty item of a `separator` joined expression, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Options;
    ///
    /// let list = Options::new().separator(';').compile_list("Bar* ; ;Baz*").unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.to_string(), "Bar*,Baz*");
    /// ```
    pub fn compile_list(&self, expr: &str) -> Result<WildcardList, ParseError> {
        expr.split(self.separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| self.compile(item))
            .collect()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            case: Case::Sensitive,
            separator: ',',
        }
    }
}
