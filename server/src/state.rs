//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything it holds is immutable after startup, so cloning per request is
//! a handful of `Arc` bumps and handlers never take a lock.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::services::token::TokenService;
use crate::services::users::UserStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
    pub users: Arc<UserStore>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AuthConfig, users: UserStore) -> Self {
        let tokens = TokenService::new(&config);
        Self { config: Arc::new(config), tokens: Arc::new(tokens), users: Arc::new(users) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` with default config and the seeded demo account.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(AuthConfig::default(), UserStore::seeded())
    }

    /// `AppState` whose refresh cookie is not marked `Secure`.
    #[must_use]
    pub fn test_app_state_insecure_cookie() -> AppState {
        AppState::new(AuthConfig { cookie_secure: false, ..AuthConfig::default() }, UserStore::seeded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::users::{DEMO_PASSWORD, DEMO_USERNAME};

    #[test]
    fn state_tokens_use_state_config() {
        let state = test_helpers::test_app_state();
        let token = state.tokens.issue_access(DEMO_USERNAME).unwrap();
        let other = AppState::new(
            AuthConfig { secret_key: "different".to_owned(), ..AuthConfig::default() },
            UserStore::seeded(),
        );
        assert!(state.tokens.verify_access(&token).is_ok());
        assert!(other.tokens.verify_access(&token).is_err());
    }

    #[test]
    fn clones_share_user_store() {
        let state = test_helpers::test_app_state();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.users, &cloned.users));
        assert!(cloned.users.authenticate(DEMO_USERNAME, DEMO_PASSWORD).is_some());
    }
}
