use super::*;

#[test]
fn client_for_without_config_reports_disabled() {
    let err = client_for(None).err();
    assert_eq!(err.as_deref(), Some(AI_DISABLED_MESSAGE));
}

#[test]
fn client_for_with_key_builds_client() {
    let client = client_for(Some(LlmConfig::new("test-key"))).ok();
    assert_eq!(client.map(|c| c.model().to_owned()), Some(clubhub::llm::config::DEFAULT_MODEL.to_owned()));
}
