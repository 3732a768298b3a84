use super::*;

fn make_user() -> User {
    User {
        id: Some("u-1".to_owned()),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
    }
}

#[test]
fn default_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert_eq!(state, SessionState::signed_out());
}

#[test]
fn stored_token_starts_pending_validation() {
    let state = SessionState::from_stored_token(true);
    assert!(state.authenticated);
    assert!(state.is_pending_validation());
}

#[test]
fn no_stored_token_starts_signed_out() {
    let state = SessionState::from_stored_token(false);
    assert_eq!(state, SessionState::signed_out());
    assert!(!state.is_pending_validation());
}

#[test]
fn signed_in_carries_user() {
    let state = SessionState::signed_in(make_user());
    assert!(state.authenticated);
    assert_eq!(state.user, Some(make_user()));
    assert!(!state.is_pending_validation());
}
