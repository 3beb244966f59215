use std::fmt;

/// Describes how a needle relates to a candidate name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum MatchMode {
    /// The name equals the needle.
    #[default]
    Exact,
    /// The name starts with the needle.
    Prefix,
    /// The name ends with the needle.
    Suffix,
    /// The name contains the needle anywhere.
    Contains,
    /// Any name matches, the needle is ignored.
    Any,
}

impl MatchMode {
    /// Selects a mode from the placement of `*` around a needle.
    pub fn from_wildcards(leading: bool, trailing: bool) -> Self {
        match (leading, trailing) {
            (false, false) => Self::Exact,
            (false, true) => Self::Prefix,
            (true, false) => Self::Suffix,
            (true, true) => Self::Contains,
        }
    }

    pub(crate) fn leading_wildcard(self) -> bool {
        matches!(self, Self::Suffix | Self::Contains | Self::Any)
    }

    pub(crate) fn trailing_wildcard(self) -> bool {
        matches!(self, Self::Prefix | Self::Contains)
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::Contains => "contains",
            Self::Any => "any",
        })
    }
}

// ---

/// Case sensitivity of comparisons.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum Case {
    #[default]
    Sensitive,
    /// Both operands are folded to ASCII lowercase before comparing.
    Insensitive,
}

impl Case {
    pub fn ignoring(ignore_case: bool) -> Self {
        if ignore_case { Self::Insensitive } else { Self::Sensitive }
    }

    #[inline]
    pub(crate) fn compare(self, a: &[u8], b: &[u8]) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a.eq_ignore_ascii_case(b),
        }
    }
}
