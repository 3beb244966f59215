use super::*;

#[test]
fn test_default() {
    let settings = Settings::default();
    assert!(settings.filter.include.is_empty());
    assert!(settings.filter.exclude.is_empty());
    assert!(!settings.filter.ignore_case);
    assert_eq!(settings.filter.separator, ",");
}

#[test]
fn test_default_settings_embedded() {
    assert!(DEFAULT_SETTINGS.contains("filter:"));
    assert!(DEFAULT_SETTINGS.contains("separator: \",\""));
}
