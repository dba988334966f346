use super::*;

fn alice() -> User {
    User { username: "alice".to_owned(), email: "alice@example.com".to_owned() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn sign_in_sets_user_and_token_and_stops_loading() {
    let mut state = AuthState::default();
    state.sign_in(alice(), "tok".to_owned());
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.user, Some(alice()));
    assert_eq!(state.access_token.as_deref(), Some("tok"));
}

#[test]
fn sign_out_clears_everything_and_stops_loading() {
    let mut state = AuthState::default();
    state.sign_in(alice(), "tok".to_owned());
    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
}

#[test]
fn begin_loading_keeps_identity() {
    let mut state = AuthState::default();
    state.sign_in(alice(), "tok".to_owned());
    state.begin_loading();
    assert!(state.is_loading());
    assert!(state.is_authenticated());
}

#[test]
fn user_without_token_is_not_authenticated() {
    let state = AuthState { user: Some(alice()), access_token: None, loading: false };
    assert!(!state.is_authenticated());
}

#[test]
fn token_without_user_is_not_authenticated() {
    let state = AuthState { user: None, access_token: Some("tok".to_owned()), loading: false };
    assert!(!state.is_authenticated());
}
