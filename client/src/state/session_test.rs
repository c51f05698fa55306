use super::*;

#[test]
fn session_config_rejects_unknown_logins_by_default() {
    let config = session_config(false);
    assert_eq!(config.unknown_login, UnknownLoginPolicy::Reject);
    assert_eq!(config.storage_key, clubhub::session::DEFAULT_SESSION_KEY);
}

#[test]
fn session_config_demo_mode_falls_back_to_demo_member() {
    let config = session_config(true);
    assert_eq!(config.unknown_login, UnknownLoginPolicy::Fallback { user_id: DEMO_FALLBACK_USER_ID.to_owned() });
}

#[test]
fn demo_fallback_id_exists_in_fixtures() {
    let directory = UserDirectory::from_fixtures();
    assert!(directory.find_by_id(DEMO_FALLBACK_USER_ID).is_some());
}

#[test]
fn login_error_message_names_unknown_email() {
    let err = SessionError::UnknownIdentity { email: "ghost@club.org".to_owned() };
    assert!(login_error_message(&err).contains("ghost@club.org"));
}

#[test]
fn login_error_message_for_storage_failure_mentions_storage() {
    let err = SessionError::Storage(StorageError::Unavailable);
    assert!(login_error_message(&err).contains("storage"));
}
