use super::*;
use assert_matches::assert_matches;

#[test]
fn test_display() {
    let err = Error::Io(io::Error::other("test"));
    assert_eq!(err.to_string(), "test");

    let err = Error::InvalidSeparator("::".into());
    assert_eq!(err.to_string(), r#"invalid separator "::", use a single character"#);

    let err = Error::FileNotFound {
        filename: "names.txt".into(),
    };
    assert_eq!(err.to_string(), r#"file "names.txt" not found"#);
}

#[test]
fn test_from_parse_error() {
    let err: Error = wildcard::compile("a*b", wildcard::Case::Sensitive).unwrap_err().into();
    assert_matches!(
        err,
        Error::Pattern(wildcard::ParseError::UnsupportedWildcard { position: 1, .. })
    );
    assert!(err.to_string().starts_with("invalid pattern: unsupported wildcard at position 1"));
}
