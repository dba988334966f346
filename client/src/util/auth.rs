//! Session lifecycle for the auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers are the only writers of `RwSignal<AuthState>`. Pages call
//! them; the home gate just re-renders when the flags move.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::User;
use crate::state::auth::AuthState;

const PROFILE_LOAD_FAILED: &str = "Signed in, but your profile could not be loaded.";

/// Fold the outcome of a session lookup into the context.
fn apply_session(state: &mut AuthState, resolved: Option<(User, String)>) {
    match resolved {
        Some((user, token)) => state.sign_in(user, token),
        None => state.sign_out(),
    }
}

async fn resolve_session() -> Option<(User, String)> {
    let token = api::refresh().await?.access_token;
    let user = api::fetch_current_user(&token).await?;
    Some((user, token))
}

/// Resolve the session from the refresh cookie. Always ends with
/// `loading == false`.
pub async fn restore_session(auth: RwSignal<AuthState>) {
    auth.update(AuthState::begin_loading);
    let resolved = resolve_session().await;
    auth.update(|state| apply_session(state, resolved));
}

/// Kick off [`restore_session`] once the app mounts in the browser.
///
/// During SSR nothing runs and the gate renders its loading screen.
pub fn install_session_restore(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(restore_session(auth));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// Log in with a password and load the profile behind the new token.
///
/// # Errors
///
/// Returns a message for the login form. The context is left signed out.
pub async fn sign_in_with_password(auth: RwSignal<AuthState>, username: &str, password: &str) -> Result<(), String> {
    let token = api::login(username, password).await?.access_token;
    let resolved = api::fetch_current_user(&token).await.map(|user| (user, token));
    let ok = resolved.is_some();
    auth.update(|state| apply_session(state, resolved));
    if ok {
        Ok(())
    } else {
        Err(PROFILE_LOAD_FAILED.to_owned())
    }
}

/// Expire the refresh cookie and clear the context, even if the request fails.
pub async fn sign_out(auth: RwSignal<AuthState>) {
    api::logout().await;
    auth.update(AuthState::sign_out);
}
