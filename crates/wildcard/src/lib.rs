//! A lightweight name filtering library built on compiled wildcard patterns.
//!
//! A wildcard string is compiled once into a [`WildcardPattern`]: a match mode and a literal
//! needle that is a view into the pattern's own buffer. The compiled pattern is then tested
//! against any number of candidate names. Several patterns form a [`WildcardList`], which
//! matches a name if any of its patterns does.
//!
//! # Pattern Syntax
//!
//! - `text` - matches `text` exactly
//! - `text*` - matches names starting with `text`
//! - `*text` - matches names ending with `text`
//! - `*text*` - matches names containing `text`
//! - `*` - matches any name, including the empty one
//!
//! A `*` anywhere else is rejected, there is no escaping and no `?`.
//!
//! # Examples
//!
//! ```
//! use wildcard::{Case, WildcardPattern, compile, compile_list};
//!
//! let pattern = compile("*Foo", Case::Sensitive).unwrap();
//! assert!(pattern.matches("java/lang/Foo"));
//! assert!(!pattern.matches("Foobar"));
//!
//! let list = compile_list("Bar*,Baz*", ',', Case::Sensitive).unwrap();
//! assert!(list.match_any("Bazooka"));
//! assert!(!list.match_any("Foo"));
//!
//! let pattern: WildcardPattern = "java/*".parse().unwrap();
//! assert!(pattern.matches("java/lang/Thread"));
//! ```
//!
//! # Case Folding
//!
//! With [`Case::Insensitive`] both the needle and the name are folded to ASCII lowercase
//! before comparing:
//!
//! ```
//! use wildcard::{Case, compile};
//!
//! let pattern = compile("*thread", Case::Insensitive).unwrap();
//! assert!(pattern.matches("java/lang/Thread"));
//! ```

mod compile;
mod error;
mod list;
mod mode;
mod pattern;

pub use compile::{Options, compile, compile_list};
pub use error::{CreateError, ParseError, PushError};
pub use list::WildcardList;
pub use mode::{Case, MatchMode};
pub use pattern::{Match, WildcardPattern};
