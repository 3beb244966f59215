use assert_matches::assert_matches;
use rstest::rstest;

use super::*;

fn pattern(mode: MatchMode, needle: &str) -> WildcardPattern {
    let raw = format!("<{}>", needle);
    WildcardPattern::new(mode, 1..1 + needle.len(), raw).unwrap()
}

fn matches(mode: MatchMode, needle: &str, haystack: &str) -> bool {
    pattern(mode, needle).matches(haystack)
}

#[test]
fn test_new_keeps_needle_view() {
    let p = WildcardPattern::new(MatchMode::Suffix, 1..4, "*Foo").unwrap();
    assert_eq!(p.mode(), MatchMode::Suffix);
    assert_eq!(p.case(), Case::Sensitive);
    assert_eq!(p.needle(), "Foo");
    assert_eq!(p.pattern(), "*Foo");
}

#[test]
fn test_new_out_of_bounds_returns_buffer() {
    let err = WildcardPattern::new(MatchMode::Exact, 2..10, String::from("abc")).unwrap_err();
    assert_eq!(err.range(), 2..10);
    assert_eq!(&*err.into_pattern(), "abc");
}

#[test]
fn test_new_reversed_range() {
    let err = WildcardPattern::new(MatchMode::Exact, 2..1, "abc").unwrap_err();
    assert_eq!(&*err.into_pattern(), "abc");
}

#[test]
fn test_new_not_on_char_boundary() {
    let result = WildcardPattern::new(MatchMode::Prefix, 0..1, "ж*");
    assert_matches!(result, Err(_));
}

#[test]
fn test_new_empty_needle_anywhere() {
    let p = WildcardPattern::new(MatchMode::Contains, 7..7, "abc").unwrap();
    assert_eq!(p.needle(), "");
    assert!(p.matches("xyz"));
}

#[rstest]
#[case("", true)]
#[case("anything", true)]
#[case("java/lang/Foo", true)]
fn test_any(#[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(MatchMode::Any, "ignored", haystack), expected);
    assert_eq!(matches(MatchMode::Any, "", haystack), expected);
}

#[rstest]
#[case("Foo", "Foo", true)]
#[case("Foo", "Fo", false)]
#[case("Foo", "Fooo", false)]
#[case("Foo", "foo", false)]
#[case("Foo", "", false)]
#[case("", "", true)]
#[case("", "a", false)]
fn test_exact(#[case] needle: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(MatchMode::Exact, needle, haystack), expected);
}

#[rstest]
#[case("java/", "java/lang/Thread", true)]
#[case("java/", "java/", true)]
#[case("java/", "java", false)]
#[case("java/", "javax/swing", false)]
#[case("java/", "", false)]
#[case("", "", true)]
#[case("", "x", true)]
fn test_prefix(#[case] needle: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(MatchMode::Prefix, needle, haystack), expected);
}

#[rstest]
#[case("Foo", "java/lang/Foo", true)]
#[case("Foo", "Foobar", false)]
#[case("Foo", "Foo", true)]
#[case("Foo", "oo", false)]
#[case("Foo", "", false)]
#[case("", "", true)]
fn test_suffix(#[case] needle: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(MatchMode::Suffix, needle, haystack), expected);
}

#[rstest]
#[case("", "anything", true)]
#[case("", "", true)]
#[case("lang", "java/lang/Foo", true)]
#[case("lang", "lang", true)]
#[case("lang", "lan", false)]
#[case("lang", "java/Lang/Foo", false)]
#[case("aab", "aaab", true)]
#[case("x", "", false)]
fn test_contains(#[case] needle: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(MatchMode::Contains, needle, haystack), expected);
}

#[rstest]
#[case(MatchMode::Exact, "Foo", "fOO", true)]
#[case(MatchMode::Exact, "Foo", "fOOo", false)]
#[case(MatchMode::Prefix, "java/", "JAVA/lang", true)]
#[case(MatchMode::Suffix, "foo", "java/lang/FOO", true)]
#[case(MatchMode::Suffix, "foo", "java/lang/FOX", false)]
#[case(MatchMode::Contains, "LANG", "java/lang/Foo", true)]
#[case(MatchMode::Contains, "LANG", "java/lan/Foo", false)]
#[case(MatchMode::Contains, "", "", true)]
fn test_case_insensitive(
    #[case] mode: MatchMode,
    #[case] needle: &str,
    #[case] haystack: &str,
    #[case] expected: bool,
) {
    let p = pattern(mode, needle).with_case(Case::Insensitive);
    assert_eq!(p.case(), Case::Insensitive);
    assert_eq!(p.matches(haystack), expected);
}

#[test]
fn test_case_insensitive_keeps_non_ascii_literal() {
    let p = pattern(MatchMode::Exact, "Жук").with_case(Case::Insensitive);
    assert!(p.matches("Жук"));
    assert!(!p.matches("жук"));
}

#[test]
fn test_utf8_needle() {
    assert!(matches(MatchMode::Suffix, "🦀", "rust🦀"));
    assert!(matches(MatchMode::Contains, "é", "café au lait"));
    assert!(!matches(MatchMode::Prefix, "é", "e"));
}

#[test]
fn test_match_trait() {
    let p = pattern(MatchMode::Prefix, "Bar");
    let boxed: Box<dyn Match> = Box::new(pattern(MatchMode::Prefix, "Baz"));
    assert!(Match::matches(&p, "Barrel"));
    assert!(Match::matches(&&p, "Barrel"));
    assert!(boxed.matches("Bazooka"));
}

#[rstest]
#[case(MatchMode::Exact, "Foo", "Foo")]
#[case(MatchMode::Prefix, "Foo", "Foo*")]
#[case(MatchMode::Suffix, "Foo", "*Foo")]
#[case(MatchMode::Contains, "Foo", "*Foo*")]
#[case(MatchMode::Any, "Foo", "*")]
fn test_display(#[case] mode: MatchMode, #[case] needle: &str, #[case] expected: &str) {
    assert_eq!(pattern(mode, needle).to_string(), expected);
}

#[test]
fn test_from_str() {
    let p: WildcardPattern = "java/*".parse().unwrap();
    assert_eq!(p.mode(), MatchMode::Prefix);
    assert_eq!(p.needle(), "java/");
    assert!("ja*va".parse::<WildcardPattern>().is_err());
}

#[test]
fn test_kill() {
    let p = pattern(MatchMode::Contains, "x");
    assert!(p.matches("xyz"));
    p.kill();
}

#[test]
fn test_send_sync() {
    fn check<T: Send + Sync>() {}
    check::<WildcardPattern>();
}
