use super::*;

#[test]
fn from_values_applies_defaults() {
    let cfg = LlmConfig::from_values(Some("secret"), None, None).unwrap();
    assert_eq!(cfg, LlmConfig::new("secret"));
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn from_values_parses_overrides() {
    let cfg = LlmConfig::from_values(Some(" key "), Some("gemini-2.5-pro"), Some("https://example.test/v1/")).unwrap();
    assert_eq!(cfg.api_key, "key");
    assert_eq!(cfg.model, "gemini-2.5-pro");
    assert_eq!(cfg.base_url, "https://example.test/v1");
}

#[test]
fn from_values_blank_overrides_fall_back() {
    let cfg = LlmConfig::from_values(Some("key"), Some("  "), Some("")).unwrap();
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn from_values_missing_key_errors() {
    let err = LlmConfig::from_values(None, None, None).unwrap_err().to_string();
    assert!(err.contains("GEMINI_API_KEY"));

    assert!(matches!(
        LlmConfig::from_values(Some("   "), None, None),
        Err(LlmError::MissingApiKey { .. })
    ));
}
