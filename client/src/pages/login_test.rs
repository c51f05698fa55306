use super::*;

#[test]
fn validate_email_trims_valid_address() {
    assert_eq!(validate_email("  member@ictclub.com "), Ok("member@ictclub.com"));
}

#[test]
fn validate_email_rejects_blank() {
    assert_eq!(validate_email("   "), Err("Enter your club email first."));
}

#[test]
fn validate_email_rejects_malformed_addresses() {
    for raw in ["member", "@ictclub.com", "member@localhost", "member@.com", "member@club."] {
        assert!(validate_email(raw).is_err(), "{raw} should be rejected");
    }
}
