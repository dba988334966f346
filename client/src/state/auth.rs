//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<AuthState>`. The home gate reads
//! `is_loading` / `is_authenticated` to pick a screen; `util::auth` owns the
//! async work that moves the state between loading, signed in and signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, their access token, and
/// whether the session is still being resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Bearer token for API calls. Never persisted; a reload restores it
    /// through the refresh cookie.
    pub access_token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts loading: nothing is known until the session restore finishes.
    fn default() -> Self {
        Self { user: None, access_token: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Signed in only with both a resolved user and a token to call the API with.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn sign_in(&mut self, user: User, access_token: String) {
        self.user = Some(user);
        self.access_token = Some(access_token);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.access_token = None;
        self.loading = false;
    }
}
