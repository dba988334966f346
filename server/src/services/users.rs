//! In-memory user directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login verifies credentials here and every bearer-authenticated request
//! re-resolves the token subject here, so a user removed from the store loses
//! access even while holding an unexpired token.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::password;

pub const DEMO_USERNAME: &str = "testuser";
pub const DEMO_PASSWORD: &str = "secret123";
pub const DEMO_EMAIL: &str = "test@example.com";

/// Verified against when the username is unknown, so a miss costs the same
/// hashing work as a wrong password.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| password::hash_password("authgate-dummy"));

/// A stored account.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Public view of an account, returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self { username: record.username.clone(), email: record.email.clone() }
    }
}

/// Accounts keyed by username.
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<String, UserRecord>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding only the demo account.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.insert(DEMO_USERNAME, DEMO_EMAIL, DEMO_PASSWORD);
        store
    }

    /// Add or replace an account, hashing the plaintext password.
    pub fn insert(&mut self, username: &str, email: &str, password: &str) {
        let record = UserRecord {
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: password::hash_password(password),
        };
        self.users.insert(record.username.clone(), record);
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// Return the account when the username exists and the password matches.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&UserRecord> {
        let Some(user) = self.get(username) else {
            let _ = password::verify_password(password, &DUMMY_HASH);
            return None;
        };
        password::verify_password(password, &user.password_hash).then_some(user)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
